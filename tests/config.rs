//! TOML 설정 파싱/검증 테스트.
use diesel_audit_toolbox::audit::{presets, AuditError, EquipmentClass, LoadPolicy};
use diesel_audit_toolbox::config::{Config, ConfigError};

#[test]
fn default_config_survives_toml_round_trip() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back = Config::from_toml_str(&text).expect("parse");
    assert_eq!(back.language, cfg.language);
    assert_eq!(back.load_policy, LoadPolicy::Reject);
    assert_eq!(back.presets, cfg.presets);
    assert_eq!(back.profiles, cfg.profiles);
    assert_eq!(back.default_presets, cfg.default_presets);
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let cfg = Config::from_toml_str(
        r#"
load_policy = "clamp"

[profiles.generator]
night = 0.2
"#,
    )
    .expect("parse");
    assert_eq!(cfg.load_policy, LoadPolicy::Clamp);
    assert_eq!(cfg.language, "auto");
    assert_eq!(
        cfg.profiles_for(EquipmentClass::StationaryGenerator).get("night"),
        Some(0.2)
    );
    // mobile 표는 기본값 유지
    assert_eq!(
        cfg.profiles_for(EquipmentClass::MobileEngine).get("loaded"),
        Some(0.7)
    );
    let cal = cfg
        .calibration_for(EquipmentClass::StationaryGenerator, None)
        .expect("baseline");
    assert_eq!(cal, presets::builtin_preset(presets::BASELINE).expect("builtin"));
}

#[test]
fn user_preset_overrides_and_extends() {
    let cfg = Config::from_toml_str(
        r#"
[default_presets]
mobile = "quarry"

[presets.quarry]
idle_fraction = 0.15
tolerance_percent = 8.0
aging_factor = 1.05

[presets.baseline]
idle_fraction = 0.12
tolerance_percent = 11.0
"#,
    )
    .expect("parse");
    let quarry = cfg
        .calibration_for(EquipmentClass::MobileEngine, None)
        .expect("quarry");
    assert_eq!(quarry.idle_fraction, 0.15);
    assert_eq!(quarry.specific_consumption_l_per_kwh, 0.24);
    assert_eq!(quarry.aging_factor, 1.05);

    let baseline = cfg.preset(presets::BASELINE).expect("baseline");
    assert_eq!(baseline.idle_fraction, 0.12);
    // 내장 프리셋은 사용자 설정에 없어도 찾을 수 있다
    assert!(cfg.preset(presets::HIGH_IDLE).is_ok());
    assert_eq!(cfg.effective_presets().len(), 4);
    assert_eq!(
        cfg.preset("nope"),
        Err(AuditError::UnknownPreset("nope".into()))
    );
}

#[test]
fn invalid_values_are_rejected() {
    let bad_profile = Config::from_toml_str("[profiles.mobile]\nturbo = 1.4\n");
    assert!(matches!(bad_profile, Err(ConfigError::Invalid(_))));

    let bad_default = Config::from_toml_str("[default_presets]\ngenerator = \"missing\"\n");
    assert!(matches!(bad_default, Err(ConfigError::Invalid(_))));

    let bad_preset =
        Config::from_toml_str("[presets.broken]\nidle_fraction = 1.5\ntolerance_percent = 10.0\n");
    assert!(matches!(bad_preset, Err(ConfigError::Invalid(_))));

    let bad_margin = Config::from_toml_str("friction_margin = -0.1\n");
    assert!(matches!(bad_margin, Err(ConfigError::Invalid(_))));

    let bad_toml = Config::from_toml_str("load_policy = \"sometimes\"\n");
    assert!(matches!(bad_toml, Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = std::env::temp_dir().join(format!("diesel-audit-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let cfg = diesel_audit_toolbox::config::load_or_create(&path).expect("create");
    assert!(path.exists());
    assert_eq!(cfg.friction_margin, 0.05);

    let again = diesel_audit_toolbox::config::load_or_create(&path).expect("reload");
    assert_eq!(again.presets, cfg.presets);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn preset_sfc_in_grams_is_converted_to_liters() {
    let cfg = Config::from_toml_str(
        "[presets.datasheet]\nidle_fraction = 0.1\ntolerance_percent = 10.0\nspecific_consumption_g_per_kwh = 201.6\n",
    )
    .expect("parse");
    let cal = cfg.preset("datasheet").expect("preset");
    assert!((cal.specific_consumption_l_per_kwh - 0.24).abs() < 1e-12);
    assert_eq!(cal.aging_factor, 1.0);

    // 저장 후 다시 읽으면 L/kWh로 남는다
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    assert!(!text.contains("g_per_kwh"));
    let back = Config::from_toml_str(&text).expect("reparse");
    assert_eq!(back.preset("datasheet"), Ok(cal));
}

#[test]
fn preset_rejects_unknown_or_conflicting_sfc_keys() {
    let typo = Config::from_toml_str(
        "[presets.typo]\nidle_fraction = 0.1\ntolerance_percent = 10.0\nspecific_consumption = 0.3\n",
    );
    assert!(matches!(typo, Err(ConfigError::Parse(_))));

    let both = Config::from_toml_str(
        "[presets.both]\nidle_fraction = 0.1\ntolerance_percent = 10.0\nspecific_consumption_l_per_kwh = 0.24\nspecific_consumption_g_per_kwh = 201.6\n",
    );
    assert!(matches!(both, Err(ConfigError::Parse(_))));
}

#[test]
fn profile_labels_differing_only_in_case_are_rejected() {
    let cfg = Config::from_toml_str("[profiles.generator]\nHeavy = 0.2\nheavy = 0.8\n");
    assert!(matches!(cfg, Err(ConfigError::Parse(_))));

    let spaced = Config::from_toml_str("[profiles.mobile]\n\"site \" = 0.6\nsite = 0.8\n");
    assert!(matches!(spaced, Err(ConfigError::Parse(_))));
}
