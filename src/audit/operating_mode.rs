use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::equipment::EquipmentProfile;
use super::error::{require_non_negative, AuditError};

/// 보조동력(PTO) 운전 시 본 엔진 마찰/구동계 손실로 더하는 부하율.
pub const DEFAULT_FRICTION_MARGIN: f64 = 0.05;

/// 감사 기간 동안 엔진이 어떻게 쓰였는지 나타낸다.
#[derive(Debug, Clone, PartialEq)]
pub enum OperatingMode {
    /// 이름 붙은 사용 패턴(예: "standard", "heavy"). 부하율은 프로파일 표에서 찾는다.
    FixedProfile(String),
    /// 측정 전류 기반. 부하율 = amps / max_amps
    MeteredCurrent { amps: f64, max_amps: f64 },
    /// 믹서/크레인/컴프레서 등 보조동력 운전. 부하율 = aux / 정격 + 마찰 여유
    AuxiliaryLoad { aux_power_kw: f64 },
}

impl OperatingMode {
    pub fn fixed(label: impl Into<String>) -> Self {
        OperatingMode::FixedProfile(label.into())
    }

    /// 발전기 kVA 정격으로부터 최대 전류를 구해 전류 측정 모드를 만든다.
    pub fn metered_for(profile: &EquipmentProfile, amps: f64) -> Result<Self, AuditError> {
        let max_amps = profile
            .max_current_amps()
            .ok_or_else(|| AuditError::invalid("rated_kva", 0.0))?;
        Ok(OperatingMode::MeteredCurrent { amps, max_amps })
    }
}

/// 라벨 → 고정 부하율 표. 라벨은 대소문자를 구분하지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct ProfileTable {
    entries: BTreeMap<String, f64>,
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목을 추가한다. 부하율은 (0, 1) 범위여야 한다.
    pub fn insert(&mut self, label: &str, fraction: f64) -> Result<(), AuditError> {
        if !(fraction.is_finite() && fraction > 0.0 && fraction < 1.0) {
            return Err(AuditError::invalid("profile_fraction", fraction));
        }
        self.entries.insert(normalize_label(label), fraction);
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.get(&normalize_label(label)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 모든 항목이 (0, 1) 범위인지 확인한다. 설정 파일 로드 후 호출한다.
    pub fn validate(&self) -> Result<(), AuditError> {
        match self
            .entries
            .values()
            .find(|f| !(f.is_finite() && **f > 0.0 && **f < 1.0))
        {
            Some(bad) => Err(AuditError::invalid("profile_fraction", *bad)),
            None => Ok(()),
        }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for ProfileTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (normalize_label(k), v))
                .collect(),
        }
    }
}

/// 설정 파일의 표를 읽는다. 정규화 후 같아지는 라벨이 둘 이상이면 거부한다.
impl TryFrom<BTreeMap<String, f64>> for ProfileTable {
    type Error = AuditError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut entries = BTreeMap::new();
        for (label, fraction) in map {
            let key = normalize_label(&label);
            if entries.insert(key, fraction).is_some() {
                return Err(AuditError::DuplicateProfile(label));
            }
        }
        Ok(Self { entries })
    }
}

impl From<ProfileTable> for BTreeMap<String, f64> {
    fn from(table: ProfileTable) -> Self {
        table.entries
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// 부하율이 [0, 1]을 벗어났을 때의 처리 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// `LoadOutOfRange`로 거부한다.
    #[default]
    Reject,
    /// 경계값으로 자르고 경고 로그를 남긴다.
    Clamp,
}

/// 부하율 계산에 필요한 주변 정보.
#[derive(Debug, Clone, Copy)]
pub struct LoadContext<'a> {
    pub rated_power_kw: f64,
    pub profiles: &'a ProfileTable,
    pub friction_margin: f64,
    pub policy: LoadPolicy,
}

/// 운전 모드로부터 [0, 1] 범위의 부하율을 구한다.
pub fn resolve_load(mode: &OperatingMode, ctx: &LoadContext<'_>) -> Result<f64, AuditError> {
    let raw = raw_load_fraction(mode, ctx)?;
    enforce_policy(raw, ctx.policy)
}

/// 범위 검사 전의 부하율. 보조동력이 본 엔진보다 크면 1을 넘을 수 있다.
pub fn raw_load_fraction(mode: &OperatingMode, ctx: &LoadContext<'_>) -> Result<f64, AuditError> {
    match mode {
        OperatingMode::FixedProfile(label) => ctx
            .profiles
            .get(label)
            .ok_or_else(|| AuditError::UnknownProfile(label.clone())),
        OperatingMode::MeteredCurrent { amps, max_amps } => {
            if !(max_amps.is_finite() && *max_amps > 0.0) {
                return Err(AuditError::invalid("max_amps", *max_amps));
            }
            let amps = require_non_negative("amps", *amps)?;
            Ok(amps / max_amps)
        }
        OperatingMode::AuxiliaryLoad { aux_power_kw } => {
            if !(ctx.rated_power_kw.is_finite() && ctx.rated_power_kw > 0.0) {
                return Err(AuditError::invalid("rated_power_kw", ctx.rated_power_kw));
            }
            let aux = require_non_negative("aux_power_kw", *aux_power_kw)?;
            Ok(aux / ctx.rated_power_kw + ctx.friction_margin)
        }
    }
}

fn enforce_policy(fraction: f64, policy: LoadPolicy) -> Result<f64, AuditError> {
    if (0.0..=1.0).contains(&fraction) {
        return Ok(fraction);
    }
    match policy {
        LoadPolicy::Reject => Err(AuditError::LoadOutOfRange(fraction)),
        LoadPolicy::Clamp => {
            let clamped = fraction.clamp(0.0, 1.0);
            log::warn!("load fraction {fraction:.3} outside [0, 1], clamped to {clamped:.1}");
            Ok(clamped)
        }
    }
}
