use serde::{Deserialize, Serialize};

/// 연료 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    CubicMeter,
    UsGallon,
    ImperialGallon,
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::CubicMeter => value * 1000.0,
        VolumeUnit::UsGallon => value * 3.785_411_784,
        VolumeUnit::ImperialGallon => value * 4.546_09,
    }
}

fn from_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::CubicMeter => value / 1000.0,
        VolumeUnit::UsGallon => value / 3.785_411_784,
        VolumeUnit::ImperialGallon => value / 4.546_09,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let liters = to_liter(value, from);
    from_liter(liters, to)
}
