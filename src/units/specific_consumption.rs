use serde::{Deserialize, Serialize};

/// 연료 소비율(SFC) 단위. 내부 기준은 L/kWh이다.
///
/// 엔진 제작사 데이터시트는 보통 g/kWh로 표기하므로 경유 밀도로 체적 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificConsumptionUnit {
    LiterPerKwh,
    GramPerKwh,
}

/// 경유 밀도 [kg/L] (15 °C 기준 대표값)
pub const DIESEL_DENSITY_KG_PER_L: f64 = 0.84;

fn to_l_per_kwh(value: f64, unit: SpecificConsumptionUnit) -> f64 {
    match unit {
        SpecificConsumptionUnit::LiterPerKwh => value,
        SpecificConsumptionUnit::GramPerKwh => value / 1000.0 / DIESEL_DENSITY_KG_PER_L,
    }
}

fn from_l_per_kwh(value: f64, unit: SpecificConsumptionUnit) -> f64 {
    match unit {
        SpecificConsumptionUnit::LiterPerKwh => value,
        SpecificConsumptionUnit::GramPerKwh => value * DIESEL_DENSITY_KG_PER_L * 1000.0,
    }
}

/// 연료 소비율을 변환한다.
pub fn convert_specific_consumption(
    value: f64,
    from: SpecificConsumptionUnit,
    to: SpecificConsumptionUnit,
) -> f64 {
    let base = to_l_per_kwh(value, from);
    from_l_per_kwh(base, to)
}
