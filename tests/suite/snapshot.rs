//! Save/restore tests

use landscape_dynamics::{Domain, LandscapeSnapshot, RotatingLandscape, SystemResponse};

use crate::common::{ParabolaPenalty, landscape, wandering_positions};

#[test]
fn restored_landscape_continues_identically() {
    let mut original = landscape(24, 0.1);
    let trace = wandering_positions(300);
    let (warmup, rest) = trace.split_at(120);
    for delta in warmup {
        original.apply_delta(delta * 0.2);
    }

    let json = serde_json::to_string(&original.snapshot()).unwrap();
    let snapshot: LandscapeSnapshot = serde_json::from_str(&json).unwrap();
    let mut restored = RotatingLandscape::<ParabolaPenalty>::restore(&snapshot);
    assert_eq!(restored.snapshot(), original.snapshot());

    for delta in rest {
        let expected = original.apply_delta(delta * 0.2);
        assert_eq!(restored.apply_delta(delta * 0.2), expected);
        assert_eq!(restored.snapshot(), original.snapshot());
    }
}

#[test]
fn restore_does_not_run_transition() {
    let snapshot = LandscapeSnapshot {
        params: *landscape(12, 0.0).dynamics().params(),
        domain: Domain::Positive,
        system_response: SystemResponse::Disadvantageous,
        angle_index: 2,
        control_position: 0.0,
    };
    let restored = RotatingLandscape::<ParabolaPenalty>::restore(&snapshot);
    // A transition at 0.0 would have cooled the index to 1.
    assert_eq!(restored.angle_index(), 2);
    assert_eq!(restored.penalty_function(), restored.dynamics().penalty_function_at(2));
}

#[test]
fn snapshot_json_uses_numeric_codes() {
    let mut l = landscape(12, 0.0);
    l.apply_delta(-1.0);
    let value = serde_json::to_value(l.snapshot()).unwrap();
    assert_eq!(value["domain"], -1);
    assert_eq!(value["system_response"], 1);
    assert_eq!(value["angle_index"], -1);
    assert_eq!(value["control_position"], -1.0);
    assert_eq!(value["params"]["number_steps"], 12);
}

#[test]
fn snapshot_with_invalid_codes_is_rejected() {
    let json = serde_json::json!({
        "params": { "number_steps": 12, "max_required_step": 1.0, "safe_zone": 0.0 },
        "domain": 1,
        "system_response": 7,
        "angle_index": 0,
        "control_position": 0.0
    });
    assert!(serde_json::from_value::<LandscapeSnapshot>(json).is_err());
}
