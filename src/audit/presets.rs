//! 기본 보정 프리셋과 고정 부하 프로파일 표.
//!
//! 과거 화면별로 따로 쓰던 계수 조합을 이름 붙은 프리셋으로 정리했다.

use std::collections::BTreeMap;

use super::equipment::EquipmentClass;
use super::estimator::{Calibration, DEFAULT_SPECIFIC_CONSUMPTION_L_PER_KWH};
use super::operating_mode::ProfileTable;

/// 무부하 10% / 허용오차 12%. 발전기와 일반 차량 감사의 기본값.
pub const BASELINE: &str = "baseline";
/// 무부하 8% / 허용오차 10%. 보조동력(PTO) 운전 차량용.
pub const MOBILE_AUX: &str = "mobile-aux";
/// 무부하 25% / 허용오차 15%. 저부하 운전 비중이 큰 노후 장비용.
pub const HIGH_IDLE: &str = "high-idle";

pub fn builtin_presets() -> BTreeMap<String, Calibration> {
    [
        (BASELINE, 0.10, 12.0),
        (MOBILE_AUX, 0.08, 10.0),
        (HIGH_IDLE, 0.25, 15.0),
    ]
    .into_iter()
    .map(|(name, idle_fraction, tolerance_percent)| {
        (
            name.to_string(),
            Calibration {
                idle_fraction,
                specific_consumption_l_per_kwh: DEFAULT_SPECIFIC_CONSUMPTION_L_PER_KWH,
                tolerance_percent,
                aging_factor: 1.0,
            },
        )
    })
    .collect()
}

pub fn builtin_preset(name: &str) -> Option<Calibration> {
    builtin_presets().remove(name)
}

/// 장비 종류별 기본 부하 프로파일.
pub fn builtin_profiles(class: EquipmentClass) -> ProfileTable {
    match class {
        EquipmentClass::StationaryGenerator => [
            ("office", 0.30),
            ("standard", 0.50),
            ("heavy", 0.75),
            ("full", 0.90),
        ]
        .into_iter()
        .collect(),
        EquipmentClass::MobileEngine => [
            ("highway", 0.40),
            ("urban", 0.50),
            ("loaded", 0.70),
            ("site", 0.80),
        ]
        .into_iter()
        .collect(),
    }
}
