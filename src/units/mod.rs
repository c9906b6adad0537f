//! 단위 정의 및 변환 모듈 모음.

pub mod power;
pub mod specific_consumption;
pub mod volume;

pub use power::{convert_power, PowerUnit};
pub use specific_consumption::{
    convert_specific_consumption, SpecificConsumptionUnit, DIESEL_DENSITY_KG_PER_L,
};
pub use volume::{convert_volume, VolumeUnit};
