use serde::{Deserialize, Serialize};

use super::error::{require_positive, AuditError};
use crate::conversion::{cv_to_kw, kva_to_kw, max_current_amps};

/// 감사 대상 엔진의 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentClass {
    /// 고정식 발전기(Genset)
    StationaryGenerator,
    /// 트럭, 건설기계 등 이동식 엔진
    MobileEngine,
}

impl EquipmentClass {
    /// 설정 파일과 CLI에서 쓰는 짧은 키.
    pub fn key(&self) -> &'static str {
        match self {
            EquipmentClass::StationaryGenerator => "generator",
            EquipmentClass::MobileEngine => "mobile",
        }
    }
}

/// 감사 대상 엔진의 명판 정보. 생성 후 바뀌지 않는다.
///
/// 정격 출력은 생성 시점에 한 번만 kW로 환산해 저장한다.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentProfile {
    class: EquipmentClass,
    rated_power_kw: f64,
    /// 발전기 명판 kVA. 전류 측정 모드에서 최대 전류 계산에 쓴다.
    rated_kva: Option<f64>,
}

impl EquipmentProfile {
    /// kW 정격을 그대로 사용한다.
    pub fn from_kw(class: EquipmentClass, rated_power_kw: f64) -> Result<Self, AuditError> {
        let rated_power_kw = require_positive("rated_power_kw", rated_power_kw)?;
        Ok(Self {
            class,
            rated_power_kw,
            rated_kva: None,
        })
    }

    /// 발전기 명판 kVA로부터 생성한다 (역률 0.8).
    pub fn generator_from_kva(rated_kva: f64) -> Result<Self, AuditError> {
        let rated_kva = require_positive("rated_kva", rated_kva)?;
        Ok(Self {
            class: EquipmentClass::StationaryGenerator,
            rated_power_kw: kva_to_kw(rated_kva),
            rated_kva: Some(rated_kva),
        })
    }

    /// 이동식 엔진 명판 CV로부터 생성한다 (1 CV = 0.7355 kW).
    pub fn mobile_from_cv(rated_cv: f64) -> Result<Self, AuditError> {
        let rated_cv = require_positive("rated_cv", rated_cv)?;
        Ok(Self {
            class: EquipmentClass::MobileEngine,
            rated_power_kw: cv_to_kw(rated_cv),
            rated_kva: None,
        })
    }

    pub fn class(&self) -> EquipmentClass {
        self.class
    }

    pub fn rated_power_kw(&self) -> f64 {
        self.rated_power_kw
    }

    pub fn rated_kva(&self) -> Option<f64> {
        self.rated_kva
    }

    /// 400 V 3상 기준 최대 전류. kVA 정격이 없으면 None.
    pub fn max_current_amps(&self) -> Option<f64> {
        self.rated_kva.map(max_current_amps)
    }
}
