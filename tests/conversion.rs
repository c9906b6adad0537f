//! 명판 환산 계수와 문자열 단위 변환 테스트.
use diesel_audit_toolbox::audit::{EquipmentClass, EquipmentProfile};
use diesel_audit_toolbox::conversion::{
    convert, cv_to_kw, kva_to_kw, max_current_amps, ConversionError,
};
use diesel_audit_toolbox::quantity::QuantityKind;

#[test]
fn nameplate_factors() {
    assert!((kva_to_kw(100.0) - 80.0).abs() < 1e-12);
    assert!((cv_to_kw(400.0) - 294.2).abs() < 1e-9);
    assert!((max_current_amps(100.0) - 144.0).abs() < 1e-9);
}

#[test]
fn profile_converts_once_at_construction() {
    let gen = EquipmentProfile::generator_from_kva(250.0).expect("generator");
    assert_eq!(gen.class(), EquipmentClass::StationaryGenerator);
    assert!((gen.rated_power_kw() - 200.0).abs() < 1e-9);
    assert_eq!(gen.rated_kva(), Some(250.0));
    assert!((gen.max_current_amps().expect("amps") - 360.0).abs() < 1e-9);

    let kw = EquipmentProfile::from_kw(EquipmentClass::MobileEngine, 150.0).expect("kw");
    assert_eq!(kw.rated_power_kw(), 150.0);
    assert!(EquipmentProfile::generator_from_kva(0.0).is_err());
    assert!(EquipmentProfile::mobile_from_cv(-3.0).is_err());
}

#[test]
fn string_driven_conversion() {
    let kw = convert(QuantityKind::Power, 400.0, "CV", "kW").expect("cv->kw");
    assert!((kw - 294.2).abs() < 1e-9);
    let hp = convert(QuantityKind::Power, 74.57, "kw", "hp").expect("kw->hp");
    assert!((hp - 100.0).abs() < 1e-9);
    let gal = convert(QuantityKind::Volume, 3.785_411_784, "L", "gal").expect("l->gal");
    assert!((gal - 1.0).abs() < 1e-12);
    let m3 = convert(QuantityKind::Volume, 2500.0, "l", "m3").expect("l->m3");
    assert!((m3 - 2.5).abs() < 1e-12);
}

#[test]
fn gram_per_kwh_uses_diesel_density() {
    // 201.6 g/kWh / 0.84 kg/L = 0.24 L/kWh
    let l = convert(QuantityKind::SpecificConsumption, 201.6, "g/kWh", "L/kWh").expect("sfc");
    assert!((l - 0.24).abs() < 1e-12);
}

#[test]
fn unknown_unit_is_an_error() {
    match convert(QuantityKind::Power, 1.0, "furlong", "kW") {
        Err(ConversionError::UnknownUnit(u)) => assert_eq!(u, "furlong"),
        other => panic!("expected UnknownUnit, got {other:?}"),
    }
    assert_eq!(QuantityKind::from_name("sfc"), Some(QuantityKind::SpecificConsumption));
    assert_eq!(QuantityKind::from_name("mass"), None);
}
