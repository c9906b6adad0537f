use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const VERDICT_CONSISTENT: &str = "verdict.consistent";
    pub const VERDICT_OVERCONSUMPTION: &str = "verdict.overconsumption";
    pub const VERDICT_UNDERCONSUMPTION: &str = "verdict.underconsumption";
    pub const INFO_NO_DECLARED_VOLUME: &str = "info.no_declared_volume";
    pub const INFO_DEGENERATE: &str = "info.degenerate";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_SITE: &str = "report.site";
    pub const REPORT_EQUIPMENT: &str = "report.equipment";
    pub const REPORT_RATED_POWER: &str = "report.rated_power";
    pub const REPORT_LOAD: &str = "report.load";
    pub const REPORT_RATE: &str = "report.rate";
    pub const REPORT_DECLARED: &str = "report.declared";
    pub const REPORT_THEORETICAL: &str = "report.theoretical";
    pub const REPORT_DELTA: &str = "report.delta";
    pub const REPORT_IMPACT: &str = "report.impact";
    pub const REPORT_TOLERANCE: &str = "report.tolerance";
    pub const REPORT_VERDICT: &str = "report.verdict";

    pub const CLASS_GENERATOR: &str = "class.generator";
    pub const CLASS_MOBILE: &str = "class.mobile";

    pub const LIST_PRESETS: &str = "list.presets";
    pub const LIST_PROFILES: &str = "list.profiles";
    pub const CONVERT_RESULT: &str = "convert.result";
    pub const ERROR_PREFIX: &str = "general.error_prefix";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Fr,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else if c.starts_with("fr") {
            Language::Fr
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/fr)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾고, 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let found = match self.lang {
            Language::Ko => ko(key),
            Language::Fr => fr(key),
            Language::En => None,
        };
        found.or_else(|| en(key)).unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("fr") => Some("fr".into()),
        other => {
            log::warn!("unsupported language code {other:?}, falling back");
            None
        }
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "fr" => Some("fr".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        VERDICT_CONSISTENT => "CONSISTENT CONSUMPTION",
        VERDICT_OVERCONSUMPTION => "ANOMALY DETECTED (PROBABLE THEFT OR LEAK)",
        VERDICT_UNDERCONSUMPTION => "UNDER-CONSUMPTION (REPORTING OR SENSOR ERROR?)",
        INFO_NO_DECLARED_VOLUME => "No declared volume yet: enter the fuel quantity to get a verdict.",
        INFO_DEGENERATE => "Theoretical volume is zero: deviation percentage not defined.",
        REPORT_TITLE => "DIESEL FUEL AUDIT",
        REPORT_SITE => "Site",
        REPORT_EQUIPMENT => "Equipment",
        REPORT_RATED_POWER => "Rated power",
        REPORT_LOAD => "Load",
        REPORT_RATE => "Model rate",
        REPORT_DECLARED => "Declared",
        REPORT_THEORETICAL => "Theoretical",
        REPORT_DELTA => "Deviation",
        REPORT_IMPACT => "Value",
        REPORT_TOLERANCE => "Tolerance",
        REPORT_VERDICT => "Verdict",
        CLASS_GENERATOR => "Stationary generator",
        CLASS_MOBILE => "Truck / mobile engine",
        LIST_PRESETS => "Calibration presets:",
        LIST_PROFILES => "Load profiles:",
        CONVERT_RESULT => "Result:",
        ERROR_PREFIX => "Error:",
        _ => return None,
    })
}

fn fr(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        VERDICT_CONSISTENT => "CONSOMMATION COHÉRENTE",
        VERDICT_OVERCONSUMPTION => "ANOMALIE DÉTECTÉE (VOL PROBABLE)",
        VERDICT_UNDERCONSUMPTION => "SOUS-CONSOMMATION (ERREUR DE SAISIE ?)",
        INFO_NO_DECLARED_VOLUME => "Aucune consommation déclarée : saisissez le volume pour obtenir un verdict.",
        INFO_DEGENERATE => "Consommation théorique nulle : écart en pourcentage non défini.",
        REPORT_TITLE => "AUDIT CARBURANT DIESEL",
        REPORT_SITE => "Site",
        REPORT_EQUIPMENT => "Équipement",
        REPORT_RATED_POWER => "Puissance",
        REPORT_LOAD => "Charge",
        REPORT_RATE => "Débit modèle",
        REPORT_DECLARED => "Déclaré",
        REPORT_THEORETICAL => "Théorique",
        REPORT_DELTA => "Écart",
        REPORT_IMPACT => "Valeur",
        REPORT_TOLERANCE => "Tolérance",
        REPORT_VERDICT => "Verdict",
        CLASS_GENERATOR => "Groupe électrogène",
        CLASS_MOBILE => "Camion / engin",
        LIST_PRESETS => "Préréglages de calibration :",
        LIST_PROFILES => "Profils de charge :",
        CONVERT_RESULT => "Résultat :",
        ERROR_PREFIX => "Erreur :",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        VERDICT_CONSISTENT => "정상 소비",
        VERDICT_OVERCONSUMPTION => "이상 감지 (도난/누유 의심)",
        VERDICT_UNDERCONSUMPTION => "과소 소비 (입력/센서 오류?)",
        INFO_NO_DECLARED_VOLUME => "신고 소비량이 없습니다. 연료량을 입력하면 판정합니다.",
        INFO_DEGENERATE => "이론 소비량이 0이라 편차율을 정의할 수 없습니다.",
        REPORT_TITLE => "디젤 연료 감사",
        REPORT_SITE => "현장",
        REPORT_EQUIPMENT => "장비",
        REPORT_RATED_POWER => "정격 출력",
        REPORT_LOAD => "부하율",
        REPORT_RATE => "모델 소비율",
        REPORT_DECLARED => "신고량",
        REPORT_THEORETICAL => "이론량",
        REPORT_DELTA => "편차",
        REPORT_IMPACT => "금액",
        REPORT_TOLERANCE => "허용 오차",
        REPORT_VERDICT => "판정",
        CLASS_GENERATOR => "고정식 발전기",
        CLASS_MOBILE => "트럭/건설기계",
        LIST_PRESETS => "보정 프리셋:",
        LIST_PROFILES => "부하 프로파일:",
        CONVERT_RESULT => "변환 결과:",
        ERROR_PREFIX => "오류:",
        _ => return None,
    })
}
