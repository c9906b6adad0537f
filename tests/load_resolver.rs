//! 운전 모드 → 부하율 변환과 범위 이탈 처리 테스트.
use diesel_audit_toolbox::audit::{
    presets, raw_load_fraction, resolve_load, AuditError, EquipmentClass, EquipmentProfile,
    LoadContext, LoadPolicy, OperatingMode, ProfileTable, DEFAULT_FRICTION_MARGIN,
};

fn ctx(rated_power_kw: f64, profiles: &ProfileTable, policy: LoadPolicy) -> LoadContext<'_> {
    LoadContext {
        rated_power_kw,
        profiles,
        friction_margin: DEFAULT_FRICTION_MARGIN,
        policy,
    }
}

#[test]
fn fixed_profile_lookup_ignores_case() {
    let table = presets::builtin_profiles(EquipmentClass::StationaryGenerator);
    let c = ctx(80.0, &table, LoadPolicy::Reject);
    assert_eq!(resolve_load(&OperatingMode::fixed("heavy"), &c), Ok(0.75));
    assert_eq!(resolve_load(&OperatingMode::fixed(" FULL "), &c), Ok(0.90));
}

#[test]
fn unknown_profile_is_reported() {
    let table = presets::builtin_profiles(EquipmentClass::MobileEngine);
    let c = ctx(220.0, &table, LoadPolicy::Reject);
    assert_eq!(
        resolve_load(&OperatingMode::fixed("offroad"), &c),
        Err(AuditError::UnknownProfile("offroad".into()))
    );
}

#[test]
fn metered_current_ratio_and_errors() {
    let table = ProfileTable::new();
    let c = ctx(80.0, &table, LoadPolicy::Reject);
    let mode = OperatingMode::MeteredCurrent {
        amps: 72.0,
        max_amps: 144.0,
    };
    assert_eq!(resolve_load(&mode, &c), Ok(0.5));

    let negative = OperatingMode::MeteredCurrent {
        amps: -1.0,
        max_amps: 144.0,
    };
    assert!(matches!(
        resolve_load(&negative, &c),
        Err(AuditError::InvalidParameter { name: "amps", .. })
    ));
    let no_max = OperatingMode::MeteredCurrent {
        amps: 10.0,
        max_amps: 0.0,
    };
    assert!(matches!(
        resolve_load(&no_max, &c),
        Err(AuditError::InvalidParameter {
            name: "max_amps",
            ..
        })
    ));
}

#[test]
fn metered_mode_needs_kva_rating() {
    let truck = EquipmentProfile::mobile_from_cv(300.0).expect("truck");
    assert!(truck.max_current_amps().is_none());
    assert!(matches!(
        OperatingMode::metered_for(&truck, 50.0),
        Err(AuditError::InvalidParameter {
            name: "rated_kva",
            ..
        })
    ));
}

#[test]
fn auxiliary_load_adds_friction_margin() {
    let table = ProfileTable::new();
    let c = ctx(200.0, &table, LoadPolicy::Reject);
    let mode = OperatingMode::AuxiliaryLoad { aux_power_kw: 50.0 };
    let load = resolve_load(&mode, &c).expect("aux");
    assert!((load - 0.30).abs() < 1e-12);

    let broken = ctx(0.0, &table, LoadPolicy::Reject);
    assert!(matches!(
        resolve_load(&mode, &broken),
        Err(AuditError::InvalidParameter {
            name: "rated_power_kw",
            ..
        })
    ));
}

#[test]
fn oversized_auxiliary_load_rejected_by_default() {
    // 보조동력이 본 엔진 출력보다 큰 경우: 모델 적용 불가
    let table = ProfileTable::new();
    let mode = OperatingMode::AuxiliaryLoad {
        aux_power_kw: 400.0,
    };
    let reject = ctx(294.2, &table, LoadPolicy::Reject);
    let raw = raw_load_fraction(&mode, &reject).expect("raw");
    assert!(raw > 1.0);
    assert!(matches!(
        resolve_load(&mode, &reject),
        Err(AuditError::LoadOutOfRange(v)) if (v - raw).abs() < 1e-12
    ));
}

#[test]
fn clamp_policy_caps_load_at_one() {
    let table = ProfileTable::new();
    let clamp = ctx(80.0, &table, LoadPolicy::Clamp);
    let over = OperatingMode::MeteredCurrent {
        amps: 180.0,
        max_amps: 144.0,
    };
    assert_eq!(resolve_load(&over, &clamp), Ok(1.0));
}

#[test]
fn profile_table_rejects_out_of_range_entries() {
    let mut table = ProfileTable::new();
    assert!(table.insert("idle", 0.0).is_err());
    assert!(table.insert("overload", 1.2).is_err());
    assert!(table.insert("Night", 0.25).is_ok());
    assert_eq!(table.get("night"), Some(0.25));
    assert_eq!(table.len(), 1);
}

#[test]
fn out_of_range_error_carries_the_raw_fraction() {
    let message = AuditError::LoadOutOfRange(1.75).to_string();
    assert!(message.contains("1.750"), "{message}");
    let duplicate = AuditError::DuplicateProfile("Heavy".into()).to_string();
    assert!(duplicate.contains("Heavy"), "{duplicate}");
}
