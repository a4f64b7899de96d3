//! Config-driven construction tests

use std::fs;

use landscape_config::{ConfigError, LandscapeConfig};
use landscape_dynamics::RotatingLandscape;

use crate::common::{ParabolaPenalty, init_tracing};

#[test]
fn builds_landscape_from_config_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[landscape]\nnumber_steps = 8\nmax_required_step = 2.0\nsafe_zone = 0.5\n\n[control]\nstart_position = 1.5\n",
    )
    .unwrap();

    let config = LandscapeConfig::load_from(&path).unwrap().unwrap();
    let params = config.landscape.unwrap();
    let mut landscape = RotatingLandscape::<ParabolaPenalty>::from_params(params);
    landscape.set_control_start_value(config.control.start_position);

    assert_eq!(landscape.dynamics().strongest_penalty_index(), 2);
    assert_eq!(landscape.dynamics().safe_zone(), 0.5);
    assert_eq!(landscape.control_position(), 1.5);
    assert_eq!(landscape.angle_index(), 0);

    landscape.apply_delta(0.0);
    assert_eq!((landscape.domain(), landscape.angle_index()), (1, 1));
}

#[test]
fn invalid_landscape_table_is_a_parse_error() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[landscape]\nnumber_steps = 12\nmax_required_step = 1.0\nsafe_zone = -0.1\n",
    )
    .unwrap();

    let err = LandscapeConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("safe_zone"), "{err}");
}
