//! Willans-line 근사에 의한 디젤 엔진 이론 연료 소비량 계산.
//!
//! 시간당 소비량 = 정격출력 × SFC × (무부하분 + 부하계수 × 부하율) × 노후계수
//!
//! 무부하분(idle fraction)은 마찰/펌핑 손실처럼 부하와 무관하게 드는 연료의 비율이고,
//! 부하계수는 항상 `1 - 무부하분`이다. 두 값은 측정으로 맞추는 보정 상수이다.

use serde::{Deserialize, Serialize};

use super::error::{require_positive, AuditError};
use crate::units::{convert_specific_consumption, SpecificConsumptionUnit};

/// 대표 디젤 연료 소비율 [L/kWh]
pub const DEFAULT_SPECIFIC_CONSUMPTION_L_PER_KWH: f64 = 0.24;

/// 엔진 모델 보정값 묶음. 프리셋 하나가 이 구조체 하나이다.
///
/// 설정 파일에서는 SFC를 `specific_consumption_l_per_kwh` 또는
/// `specific_consumption_g_per_kwh` 중 하나로 적는다. g/kWh는 읽을 때 L/kWh로 바뀐다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CalibrationFile")]
pub struct Calibration {
    /// 무부하 연료 비율 (0 ≤ x < 1)
    pub idle_fraction: f64,
    /// 연료 소비율 [L/kWh]
    pub specific_consumption_l_per_kwh: f64,
    /// 판정 허용 오차 [%]
    pub tolerance_percent: f64,
    /// 노후 보정 계수 (1.0 = 보정 없음)
    pub aging_factor: f64,
}

/// 설정 파일에 적힌 그대로의 보정값.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CalibrationFile {
    idle_fraction: f64,
    #[serde(default)]
    specific_consumption_l_per_kwh: Option<f64>,
    #[serde(default)]
    specific_consumption_g_per_kwh: Option<f64>,
    tolerance_percent: f64,
    #[serde(default = "default_aging_factor")]
    aging_factor: f64,
}

impl TryFrom<CalibrationFile> for Calibration {
    type Error = String;

    fn try_from(file: CalibrationFile) -> Result<Self, Self::Error> {
        let specific_consumption_l_per_kwh = match (
            file.specific_consumption_l_per_kwh,
            file.specific_consumption_g_per_kwh,
        ) {
            (Some(_), Some(_)) => {
                return Err(
                    "specific_consumption_l_per_kwh 와 specific_consumption_g_per_kwh 는 함께 쓸 수 없습니다"
                        .to_string(),
                )
            }
            (Some(l_per_kwh), None) => l_per_kwh,
            (None, Some(g_per_kwh)) => convert_specific_consumption(
                g_per_kwh,
                SpecificConsumptionUnit::GramPerKwh,
                SpecificConsumptionUnit::LiterPerKwh,
            ),
            (None, None) => DEFAULT_SPECIFIC_CONSUMPTION_L_PER_KWH,
        };
        Ok(Self {
            idle_fraction: file.idle_fraction,
            specific_consumption_l_per_kwh,
            tolerance_percent: file.tolerance_percent,
            aging_factor: file.aging_factor,
        })
    }
}

fn default_aging_factor() -> f64 {
    1.0
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            idle_fraction: 0.10,
            specific_consumption_l_per_kwh: DEFAULT_SPECIFIC_CONSUMPTION_L_PER_KWH,
            tolerance_percent: 12.0,
            aging_factor: 1.0,
        }
    }
}

impl Calibration {
    /// 부하 비례 계수. 무부하분과 합이 1이 되도록 항상 계산으로 얻는다.
    pub fn load_coefficient(&self) -> f64 {
        1.0 - self.idle_fraction
    }

    /// 보정값이 물리적으로 말이 되는지 확인한다.
    pub fn validate(&self) -> Result<(), AuditError> {
        if !(self.idle_fraction.is_finite()
            && self.idle_fraction >= 0.0
            && self.idle_fraction < 1.0)
        {
            return Err(AuditError::invalid("idle_fraction", self.idle_fraction));
        }
        require_positive(
            "specific_consumption_l_per_kwh",
            self.specific_consumption_l_per_kwh,
        )?;
        if !(self.tolerance_percent.is_finite() && self.tolerance_percent >= 0.0) {
            return Err(AuditError::invalid(
                "tolerance_percent",
                self.tolerance_percent,
            ));
        }
        require_positive("aging_factor", self.aging_factor)?;
        Ok(())
    }
}

/// 이론 소비량 계산 입력.
#[derive(Debug, Clone)]
pub struct ConsumptionInput {
    /// 정격 출력 [kW]
    pub rated_power_kw: f64,
    /// 부하율 (0~1)
    pub load_fraction: f64,
    /// 운전 시간 [h]
    pub duration_hours: f64,
    /// 연료 소비율 [L/kWh]
    pub specific_consumption_l_per_kwh: f64,
    /// 무부하 연료 비율
    pub idle_fraction: f64,
    /// 노후 보정 계수
    pub aging_factor: f64,
}

impl ConsumptionInput {
    pub fn with_calibration(
        rated_power_kw: f64,
        load_fraction: f64,
        duration_hours: f64,
        calibration: &Calibration,
    ) -> Self {
        Self {
            rated_power_kw,
            load_fraction,
            duration_hours,
            specific_consumption_l_per_kwh: calibration.specific_consumption_l_per_kwh,
            idle_fraction: calibration.idle_fraction,
            aging_factor: calibration.aging_factor,
        }
    }
}

/// 이론 소비량 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionResult {
    /// 시간당 소비량 [L/h]
    pub hourly_rate_l_per_h: f64,
    /// 기간 전체 이론 소비량 [L]
    pub theoretical_volume_l: f64,
}

/// 이론 연료 소비량을 계산한다.
///
/// 결과는 출력과 운전 시간에 비례하고 부하율에 대해 단조 증가한다.
/// 부하율은 호출 전에 [`resolve_load`](super::resolve_load)에서 범위가 정리되어 있어야 한다.
pub fn estimate(input: ConsumptionInput) -> Result<ConsumptionResult, AuditError> {
    let rated_power_kw = require_positive("rated_power_kw", input.rated_power_kw)?;
    let duration_hours = require_positive("duration_hours", input.duration_hours)?;
    if !(0.0..=1.0).contains(&input.load_fraction) {
        return Err(AuditError::invalid("load_fraction", input.load_fraction));
    }
    let calibration = Calibration {
        idle_fraction: input.idle_fraction,
        specific_consumption_l_per_kwh: input.specific_consumption_l_per_kwh,
        tolerance_percent: 0.0,
        aging_factor: input.aging_factor,
    };
    calibration.validate()?;

    let load_term =
        calibration.idle_fraction + calibration.load_coefficient() * input.load_fraction;
    let hourly_rate_l_per_h = rated_power_kw
        * calibration.specific_consumption_l_per_kwh
        * load_term
        * calibration.aging_factor;

    Ok(ConsumptionResult {
        hourly_rate_l_per_h,
        theoretical_volume_l: hourly_rate_l_per_h * duration_hours,
    })
}
