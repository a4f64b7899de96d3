//! Control-position adapter tests

use landscape_dynamics::{DEFAULT_CONTROL_START_VALUE, PenaltyFunction};

use crate::common::{landscape, wandering_positions};

#[test]
fn deltas_drive_dynamics_with_absolute_position() {
    let mut l = landscape(12, 0.0);
    let mut expected_position = DEFAULT_CONTROL_START_VALUE;
    for delta in [0.5, 0.5, -0.25, -2.0, 0.75] {
        expected_position += delta;
        let reward = l.apply_delta(delta);
        assert_eq!(l.control_position(), expected_position);
        assert_eq!(
            reward,
            -l.penalty_function().reward(expected_position)
        );
    }
}

#[test]
fn positive_deltas_follow_quarter_turn_scenario() {
    let mut l = landscape(12, 0.0);
    l.apply_delta(1.0);
    assert_eq!((l.domain(), l.system_response(), l.angle_index()), (1, 1, 1));
    l.apply_delta(0.0);
    assert_eq!(l.angle_index(), 2);
    l.apply_delta(0.0);
    assert_eq!((l.domain(), l.system_response(), l.angle_index()), (1, -1, 3));
}

#[test]
fn reset_leaves_dynamics_to_unwind_lazily() {
    let mut l = landscape(12, 0.1);
    l.apply_delta(1.0);
    l.apply_delta(0.0);
    assert_eq!(l.angle_index(), 2);

    l.reset();
    assert_eq!(l.control_position(), 0.0);
    assert_eq!(l.angle_index(), 2);

    l.apply_delta(0.0);
    assert_eq!(l.angle_index(), 1);
    l.apply_delta(0.0);
    assert_eq!((l.domain(), l.system_response(), l.angle_index()), (0, 1, 0));
}

#[test]
fn set_control_position_matches_equivalent_delta() {
    let mut by_delta = landscape(24, 0.05);
    let mut by_position = landscape(24, 0.05);
    let mut position = 0.0;
    for delta in wandering_positions(200) {
        position += delta * 0.1;
        by_delta.apply_delta(delta * 0.1);
        by_position.set_control_position(position);
        assert_eq!(by_delta.angle_index(), by_position.angle_index());
        assert_eq!(by_delta.domain(), by_position.domain());
        assert_eq!(by_delta.reward(), by_position.reward());
    }
}

#[test]
fn optimum_queries_track_active_function() {
    let mut l = landscape(16, 0.0);
    for delta in wandering_positions(30) {
        l.apply_delta(delta);
        let active = l.penalty_function();
        assert_eq!(l.optimal_position(), active.optimum_radius());
        assert_eq!(l.optimal_reward(), -active.optimum_value());
        assert!(l.reward() <= l.optimal_reward());
    }
}

#[test]
fn numeric_accessors_mirror_dynamics() {
    let mut l = landscape(12, 0.0);
    l.apply_delta(-1.0);
    let d = l.dynamics();
    assert_eq!(l.domain(), d.domain().value());
    assert_eq!(l.system_response(), d.system_response().value());
    assert_eq!(l.angle_index(), d.angle_index());
}
