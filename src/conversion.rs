//! 현장 명판 값을 엔진 모델 입력으로 바꾸는 환산 함수 모음.
//!
//! 발전기 명판은 피상전력(kVA), 트럭/건설기계 명판은 CV로 표기되는 경우가 많다.
//! 계수는 모두 근사값이다.

use crate::quantity::QuantityKind;
use crate::units::power::KW_PER_METRIC_HP;
use crate::units::*;

/// 발전기 역률 가정값. kVA → kW 환산에 사용한다.
pub const GENERATOR_POWER_FACTOR: f64 = 0.8;

/// 400 V 3상 기준 kVA당 정격 전류 [A/kVA]. 1000 / (√3 × 400) ≈ 1.443 을 1.44로 쓴다.
pub const AMPS_PER_KVA_400V_THREE_PHASE: f64 = 1.44;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 발전기 피상전력(kVA)을 역률 0.8 가정으로 유효전력(kW)으로 환산한다.
pub fn kva_to_kw(kva: f64) -> f64 {
    kva * GENERATOR_POWER_FACTOR
}

/// 미터법 마력(CV/PS)을 kW로 환산한다.
pub fn cv_to_kw(cv: f64) -> f64 {
    cv * KW_PER_METRIC_HP
}

/// 400 V 3상 발전기의 정격(최대) 상전류를 kVA로부터 구한다.
///
/// kW 값에서는 구할 수 없다. 역률 환산 전의 kVA 값이 필요하다.
pub fn max_current_amps(rated_kva: f64) -> f64 {
    rated_kva * AMPS_PER_KVA_400V_THREE_PHASE
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `kW`, `CV`, `hp`, `L`, `gal`, `g/kWh` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::SpecificConsumption => {
            let from = parse_specific_consumption_unit(from_unit_str)?;
            let to = parse_specific_consumption_unit(to_unit_str)?;
            Ok(convert_specific_consumption(value, from, to))
        }
    }
}

pub fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "w" | "watt" => Ok(PowerUnit::Watt),
        "cv" | "ps" | "ch" => Ok(PowerUnit::MetricHorsepower),
        "hp" | "bhp" => Ok(PowerUnit::MechanicalHorsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "gal" | "usgal" | "us_gal" => Ok(VolumeUnit::UsGallon),
        "impgal" | "imp_gal" => Ok(VolumeUnit::ImperialGallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_specific_consumption_unit(
    s: &str,
) -> Result<SpecificConsumptionUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "l/kwh" => Ok(SpecificConsumptionUnit::LiterPerKwh),
        "g/kwh" => Ok(SpecificConsumptionUnit::GramPerKwh),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
