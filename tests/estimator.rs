//! Willans-line 이론 소비량 계산 성질 테스트.
use diesel_audit_toolbox::audit::{estimate, AuditError, Calibration, ConsumptionInput};

fn input(rated_power_kw: f64, load_fraction: f64, duration_hours: f64) -> ConsumptionInput {
    ConsumptionInput::with_calibration(
        rated_power_kw,
        load_fraction,
        duration_hours,
        &Calibration::default(),
    )
}

#[test]
fn linear_in_duration() {
    for load in [0.0, 0.3, 0.5, 1.0] {
        let one = estimate(input(80.0, load, 1.0)).expect("1h");
        let two = estimate(input(80.0, load, 2.0)).expect("2h");
        assert_eq!(two.theoretical_volume_l, 2.0 * one.theoretical_volume_l);
        assert_eq!(one.hourly_rate_l_per_h, two.hourly_rate_l_per_h);
    }
}

#[test]
fn proportional_to_rated_power() {
    let small = estimate(input(50.0, 0.4, 3.0)).expect("50 kW");
    let large = estimate(input(100.0, 0.4, 3.0)).expect("100 kW");
    assert!((large.theoretical_volume_l - 2.0 * small.theoretical_volume_l).abs() < 1e-9);
}

#[test]
fn monotonic_in_load_fraction() {
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=20 {
        let load = step as f64 / 20.0;
        let v = estimate(input(120.0, load, 4.0))
            .expect("estimate")
            .theoretical_volume_l;
        assert!(v >= previous, "load {load}: {v} < {previous}");
        previous = v;
    }
}

#[test]
fn idle_term_consumes_fuel_at_zero_load() {
    // 80 kW × 0.24 × 0.1 = 1.92 L/h
    let r = estimate(input(80.0, 0.0, 1.0)).expect("idle");
    assert!((r.hourly_rate_l_per_h - 1.92).abs() < 1e-12);
    // 전부하에서는 정격 × SFC
    let full = estimate(input(80.0, 1.0, 1.0)).expect("full");
    assert!((full.hourly_rate_l_per_h - 19.2).abs() < 1e-12);
}

#[test]
fn aging_factor_scales_rate() {
    let worn = Calibration {
        aging_factor: 1.05,
        ..Calibration::default()
    };
    let base = estimate(input(80.0, 0.5, 10.0)).expect("base");
    let aged = estimate(ConsumptionInput::with_calibration(80.0, 0.5, 10.0, &worn)).expect("aged");
    assert!((aged.theoretical_volume_l - base.theoretical_volume_l * 1.05).abs() < 1e-9);
}

#[test]
fn rejects_non_positive_power_and_duration() {
    assert!(matches!(
        estimate(input(0.0, 0.5, 1.0)),
        Err(AuditError::InvalidParameter {
            name: "rated_power_kw",
            ..
        })
    ));
    assert!(matches!(
        estimate(input(-10.0, 0.5, 1.0)),
        Err(AuditError::InvalidParameter {
            name: "rated_power_kw",
            ..
        })
    ));
    assert!(matches!(
        estimate(input(80.0, 0.5, 0.0)),
        Err(AuditError::InvalidParameter {
            name: "duration_hours",
            ..
        })
    ));
    assert!(estimate(input(f64::NAN, 0.5, 1.0)).is_err());
}

#[test]
fn rejects_load_outside_unit_interval() {
    assert!(matches!(
        estimate(input(80.0, 1.2, 1.0)),
        Err(AuditError::InvalidParameter {
            name: "load_fraction",
            ..
        })
    ));
    assert!(estimate(input(80.0, -0.1, 1.0)).is_err());
}

#[test]
fn rejects_bad_calibration_values() {
    let mut i = input(80.0, 0.5, 1.0);
    i.idle_fraction = 1.0;
    assert!(matches!(
        estimate(i),
        Err(AuditError::InvalidParameter {
            name: "idle_fraction",
            ..
        })
    ));
    let mut i = input(80.0, 0.5, 1.0);
    i.specific_consumption_l_per_kwh = 0.0;
    assert!(estimate(i).is_err());
    let mut i = input(80.0, 0.5, 1.0);
    i.aging_factor = 0.0;
    assert!(estimate(i).is_err());
}

#[test]
fn load_coefficient_complements_idle() {
    let cal = Calibration {
        idle_fraction: 0.25,
        ..Calibration::default()
    };
    assert!((cal.load_coefficient() - 0.75).abs() < 1e-12);
    assert!((cal.idle_fraction + cal.load_coefficient() - 1.0).abs() < 1e-12);
}
