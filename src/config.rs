use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::audit::presets::{self, BASELINE};
use crate::audit::{
    AuditError, Calibration, EquipmentClass, LoadPolicy, ProfileTable, DEFAULT_FRICTION_MARGIN,
};

/// 기본 설정 파일 경로 (작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 장비 종류별로 기본 사용할 보정 프리셋 이름.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPresets {
    pub generator: String,
    pub mobile: String,
}

impl Default for DefaultPresets {
    fn default() -> Self {
        Self {
            generator: BASELINE.to_string(),
            mobile: BASELINE.to_string(),
        }
    }
}

/// 장비 종류별 고정 부하 프로파일 표.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileTables {
    pub generator: ProfileTable,
    pub mobile: ProfileTable,
}

impl Default for ProfileTables {
    fn default() -> Self {
        Self {
            generator: presets::builtin_profiles(EquipmentClass::StationaryGenerator),
            mobile: presets::builtin_profiles(EquipmentClass::MobileEngine),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어: "auto", "en", "fr", "ko"
    pub language: String,
    /// 부하율 범위 이탈 처리
    pub load_policy: LoadPolicy,
    /// 보조동력 운전 마찰 여유
    pub friction_margin: f64,
    pub default_presets: DefaultPresets,
    /// 사용자 프리셋. 같은 이름이면 내장 프리셋보다 우선한다.
    pub presets: BTreeMap<String, Calibration>,
    pub profiles: ProfileTables,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            load_policy: LoadPolicy::Reject,
            friction_margin: DEFAULT_FRICTION_MARGIN,
            default_presets: DefaultPresets::default(),
            presets: presets::builtin_presets(),
            profiles: ProfileTables::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값은 읽었지만 쓸 수 없는 설정
    #[error("잘못된 설정: {0}")]
    Invalid(String),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(DEFAULT_CONFIG_PATH))
}

/// 주어진 경로의 설정을 로드한다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(cfg)
    } else {
        log::warn!(
            "configuration {} not found, writing defaults",
            path.display()
        );
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// TOML 문자열을 파싱하고 검증한다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::info!("saved configuration to {}", path.display());
        Ok(())
    }

    /// 프리셋 값, 프로파일 부하율, 기본 프리셋 이름을 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.friction_margin.is_finite()
            && self.friction_margin >= 0.0
            && self.friction_margin < 1.0)
        {
            return Err(ConfigError::Invalid(format!(
                "friction_margin = {}",
                self.friction_margin
            )));
        }
        for (name, cal) in &self.presets {
            cal.validate()
                .map_err(|e| ConfigError::Invalid(format!("preset {name}: {e}")))?;
        }
        for (key, table) in [
            ("generator", &self.profiles.generator),
            ("mobile", &self.profiles.mobile),
        ] {
            table
                .validate()
                .map_err(|e| ConfigError::Invalid(format!("profiles.{key}: {e}")))?;
        }
        for class in [EquipmentClass::StationaryGenerator, EquipmentClass::MobileEngine] {
            self.calibration_for(class, None)
                .map_err(|e| ConfigError::Invalid(format!("default_presets.{}: {e}", class.key())))?;
        }
        Ok(())
    }

    /// 이름으로 프리셋을 찾는다. 사용자 프리셋이 내장 프리셋보다 우선한다.
    pub fn preset(&self, name: &str) -> Result<Calibration, AuditError> {
        self.presets
            .get(name)
            .copied()
            .or_else(|| presets::builtin_preset(name))
            .ok_or_else(|| AuditError::UnknownPreset(name.to_string()))
    }

    pub fn default_preset_name(&self, class: EquipmentClass) -> &str {
        match class {
            EquipmentClass::StationaryGenerator => &self.default_presets.generator,
            EquipmentClass::MobileEngine => &self.default_presets.mobile,
        }
    }

    /// 지정한 프리셋, 없으면 장비 종류의 기본 프리셋을 돌려준다.
    pub fn calibration_for(
        &self,
        class: EquipmentClass,
        preset: Option<&str>,
    ) -> Result<Calibration, AuditError> {
        let name = preset.unwrap_or_else(|| self.default_preset_name(class));
        self.preset(name)
    }

    pub fn profiles_for(&self, class: EquipmentClass) -> &ProfileTable {
        match class {
            EquipmentClass::StationaryGenerator => &self.profiles.generator,
            EquipmentClass::MobileEngine => &self.profiles.mobile,
        }
    }

    /// 내장 프리셋에 사용자 프리셋을 덮어쓴 전체 목록.
    pub fn effective_presets(&self) -> BTreeMap<String, Calibration> {
        let mut all = presets::builtin_presets();
        all.extend(self.presets.iter().map(|(k, v)| (k.clone(), *v)));
        all
    }
}
