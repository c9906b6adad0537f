use serde::{Deserialize, Serialize};

/// 기계 출력 단위. 내부 기준은 kW이다.
///
/// 마력은 두 가지를 구분한다. 유럽/아프리카 카탈로그의 CV(PS, 미터법 마력)는
/// 0.7355 kW, 영국식 mechanical hp는 0.7457 kW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Kilowatt,
    Watt,
    MetricHorsepower,
    MechanicalHorsepower,
}

pub(crate) const KW_PER_METRIC_HP: f64 = 0.7355;
const KW_PER_MECHANICAL_HP: f64 = 0.745_7;

fn to_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::MetricHorsepower => value * KW_PER_METRIC_HP,
        PowerUnit::MechanicalHorsepower => value * KW_PER_MECHANICAL_HP,
    }
}

fn from_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => value * 1000.0,
        PowerUnit::MetricHorsepower => value / KW_PER_METRIC_HP,
        PowerUnit::MechanicalHorsepower => value / KW_PER_MECHANICAL_HP,
    }
}

/// 출력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let kw = to_kw(value, from);
    from_kw(kw, to)
}
