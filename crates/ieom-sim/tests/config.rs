use ieom_core::IeomError;
use ieom_hubbard::BasisKind;
use ieom_sim::{ConfigOverrides, SimulationConfig};

#[test]
fn missing_keys_take_defaults() {
    let config = SimulationConfig::from_yaml_str("sites: 8\ninteraction: 2.5\n").unwrap();
    assert_eq!(config.sites, 8);
    assert_eq!(config.interaction, 2.5);
    assert_eq!(config.hopping, 1.0);
    assert_eq!(config.dt, 0.01);
    assert_eq!(config.measurement_interval, 10);
    assert_eq!(config.checkpoint_interval, 100);
    assert_eq!(config.basis, BasisKind::ThreeOperator);
    assert!(config.enable_hopping && config.enable_interaction);
    assert_eq!(config.steps, None);
    config.validate().unwrap();
}

#[test]
fn yaml_round_trip() {
    let config = SimulationConfig {
        sites: 12,
        steps: Some(250),
        basis: BasisKind::OneOperator,
        enable_interaction: false,
        ..SimulationConfig::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("basis: one-operator"));
    let restored = SimulationConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(restored, config);
    assert_eq!(restored.hash().unwrap(), config.hash().unwrap());
}

#[test]
fn hash_tracks_content() {
    let config = SimulationConfig::default();
    let hash = config.hash().unwrap();
    assert_eq!(hash.len(), 64);
    let changed = SimulationConfig {
        dt: 0.02,
        ..SimulationConfig::default()
    };
    assert_ne!(changed.hash().unwrap(), hash);
}

#[test]
fn validation_rejects_unusable_runs() {
    let cases = [
        SimulationConfig {
            sites: 0,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            dt: 0.0,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            dt: -0.5,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            measurement_interval: 0,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            checkpoint_interval: 0,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            flush_interval: 0,
            ..SimulationConfig::default()
        },
    ];
    for config in cases {
        let err = config.validate().unwrap_err();
        assert!(matches!(err, IeomError::Config(_)), "{config:?}");
        assert_eq!(err.info().code, "invalid-config");
    }
}

#[test]
fn unknown_basis_is_a_parse_error() {
    let err = SimulationConfig::from_yaml_str("basis: two-operator\n").unwrap_err();
    assert_eq!(err.info().code, "config-parse");
}

#[test]
fn step_count_follows_t_end_unless_given() {
    let config = SimulationConfig::default();
    assert_eq!(config.total_steps(), 1000);
    let config = SimulationConfig {
        t_end: 0.05,
        dt: 0.02,
        ..SimulationConfig::default()
    };
    assert_eq!(config.total_steps(), 3);
    let config = SimulationConfig {
        steps: Some(7),
        ..SimulationConfig::default()
    };
    assert_eq!(config.total_steps(), 7);
}

#[test]
fn overrides_win_over_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    std::fs::write(&path, "sites: 6\nhopping: 0.5\nsteps: 40\n").unwrap();

    let overrides = ConfigOverrides {
        config: Some(path),
        hopping: Some(2.0),
        t_end: Some(1.0),
        ..ConfigOverrides::default()
    };
    let config = overrides.resolve().unwrap();
    assert_eq!(config.sites, 6);
    assert_eq!(config.hopping, 2.0);
    assert_eq!(config.steps, None);
    assert_eq!(config.total_steps(), 100);

    let invalid = ConfigOverrides {
        sites: Some(0),
        ..ConfigOverrides::default()
    };
    assert!(invalid.resolve().is_err());
}
