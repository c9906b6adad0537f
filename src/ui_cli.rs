use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::AppError;
use crate::audit::{
    self, AuditRequest, AuditWindow, EquipmentClass, EquipmentProfile, LoadSettings,
    OperatingMode,
};
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::report;

/// 디젤 발전기/트럭 연료 소비 감사 도구.
#[derive(Debug, Parser)]
#[command(name = "diesel_audit_toolbox", version)]
pub struct Cli {
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 표시 언어 (auto/en/fr/ko)
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    pub lang: String,

    /// 언어팩 디렉터리 (<lang>.toml)
    #[arg(long, global = true)]
    pub locales: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 연료 소비 감사
    #[command(subcommand)]
    Audit(AuditCommand),
    /// 단위 변환 (power / volume / sfc)
    Convert {
        #[arg(long)]
        kind: String,
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// 보정 프리셋 목록
    Presets,
    /// 부하 프로파일 목록
    Profiles,
}

#[derive(Debug, Subcommand)]
pub enum AuditCommand {
    /// 고정식 발전기 (명판 kVA)
    Generator {
        #[arg(long)]
        kva: f64,
        #[command(flatten)]
        load: GeneratorLoadArgs,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// 트럭/건설기계 (명판 CV)
    Mobile {
        #[arg(long)]
        cv: f64,
        #[command(flatten)]
        load: MobileLoadArgs,
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct GeneratorLoadArgs {
    /// 부하 프로파일 라벨 (office/standard/heavy/full)
    #[arg(long)]
    pub profile: Option<String>,
    /// 측정 상전류 [A]
    #[arg(long)]
    pub amps: Option<f64>,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct MobileLoadArgs {
    /// 운행 프로파일 라벨 (highway/urban/loaded/site)
    #[arg(long)]
    pub profile: Option<String>,
    /// 보조동력(PTO) 부하 [kW]
    #[arg(long)]
    pub aux_kw: Option<f64>,
}

#[derive(Debug, Args)]
pub struct WindowArgs {
    /// 운전 시간 [h]
    #[arg(long, conflicts_with_all = ["meter_start", "meter_end"], required_unless_present = "meter_start")]
    pub hours: Option<f64>,
    /// 아워미터 시작값 [h]
    #[arg(long, requires = "meter_end")]
    pub meter_start: Option<f64>,
    /// 아워미터 종료값 [h]
    #[arg(long, requires = "meter_start")]
    pub meter_end: Option<f64>,
    /// 신고 소비량 [L]
    #[arg(long)]
    pub declared: f64,
    /// 연료 단가 [통화/L]
    #[arg(long, default_value_t = 0.0)]
    pub price: f64,
    /// 보정 프리셋 이름
    #[arg(long)]
    pub preset: Option<String>,
    /// 허용 오차 [%] (프리셋 값 대신 사용)
    #[arg(long)]
    pub tolerance: Option<f64>,
    /// 현장/차량 번호 (보고서 표시용)
    #[arg(long)]
    pub site: Option<String>,
}

impl WindowArgs {
    fn to_window(&self) -> Result<AuditWindow, AppError> {
        let window = match (self.hours, self.meter_start, self.meter_end) {
            (Some(hours), _, _) => AuditWindow::new(hours, self.declared, self.price)?,
            (None, Some(start), Some(end)) => {
                AuditWindow::from_hour_meter(start, end, self.declared, self.price)?
            }
            _ => {
                return Err(AppError::Usage(
                    "--hours 또는 --meter-start/--meter-end 가 필요합니다.".into(),
                ))
            }
        };
        Ok(window)
    }
}

impl AuditCommand {
    fn window_args(&self) -> &WindowArgs {
        match self {
            AuditCommand::Generator { window, .. } | AuditCommand::Mobile { window, .. } => window,
        }
    }

    /// CLI 인자와 설정으로 감사 요청을 만든다.
    pub fn to_request<'a>(&self, cfg: &'a Config) -> Result<AuditRequest<'a>, AppError> {
        let (profile, mode) = match self {
            AuditCommand::Generator { kva, load, .. } => {
                let profile = EquipmentProfile::generator_from_kva(*kva)?;
                let mode = match (&load.profile, load.amps) {
                    (Some(label), _) => OperatingMode::fixed(label.as_str()),
                    (None, Some(amps)) => OperatingMode::metered_for(&profile, amps)?,
                    (None, None) => {
                        return Err(AppError::Usage("--profile 또는 --amps 가 필요합니다.".into()))
                    }
                };
                (profile, mode)
            }
            AuditCommand::Mobile { cv, load, .. } => {
                let profile = EquipmentProfile::mobile_from_cv(*cv)?;
                let mode = match (&load.profile, load.aux_kw) {
                    (Some(label), _) => OperatingMode::fixed(label.as_str()),
                    (None, Some(aux_power_kw)) => OperatingMode::AuxiliaryLoad { aux_power_kw },
                    (None, None) => {
                        return Err(AppError::Usage(
                            "--profile 또는 --aux-kw 가 필요합니다.".into(),
                        ))
                    }
                };
                (profile, mode)
            }
        };
        let args = self.window_args();
        let mut calibration = cfg.calibration_for(profile.class(), args.preset.as_deref())?;
        if let Some(tolerance) = args.tolerance {
            calibration.tolerance_percent = tolerance;
        }
        Ok(AuditRequest {
            load: LoadSettings {
                profiles: cfg.profiles_for(profile.class()),
                friction_margin: cfg.friction_margin,
                policy: cfg.load_policy,
            },
            profile,
            mode,
            window: args.to_window()?,
            calibration,
        })
    }
}

/// 감사를 수행하고 보고서를 출력한다.
pub fn handle_audit(cmd: &AuditCommand, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    let request = cmd.to_request(cfg)?;
    let outcome = audit::run_audit(&request)?;
    let site = cmd.window_args().site.as_deref();
    print!("{}", report::render(&outcome, tr, site));
    Ok(())
}

/// 단위 변환 결과를 출력한다.
pub fn handle_convert(
    tr: &Translator,
    kind: &str,
    value: f64,
    from: &str,
    to: &str,
) -> Result<(), AppError> {
    let kind = QuantityKind::from_name(kind)
        .ok_or_else(|| AppError::Usage(format!("지원하지 않는 물리량: {kind}")))?;
    let result = conversion::convert(kind, value, from, to)?;
    println!("{} {result} {}", tr.t(keys::CONVERT_RESULT), to.trim());
    Ok(())
}

/// 내장 + 사용자 프리셋을 출력한다.
pub fn handle_presets(cfg: &Config, tr: &Translator) {
    println!("{}", tr.t(keys::LIST_PRESETS));
    for (name, cal) in cfg.effective_presets() {
        let mut defaults = Vec::new();
        for class in [EquipmentClass::StationaryGenerator, EquipmentClass::MobileEngine] {
            if cfg.default_preset_name(class) == name {
                defaults.push(class.key());
            }
        }
        let marker = if defaults.is_empty() {
            String::new()
        } else {
            format!(" [{}]", defaults.join(", "))
        };
        println!(
            "  {name}: idle {:.2} / load {:.2}, SFC {:.3} L/kWh, ±{}%, aging {:.2}{marker}",
            cal.idle_fraction,
            cal.load_coefficient(),
            cal.specific_consumption_l_per_kwh,
            cal.tolerance_percent,
            cal.aging_factor
        );
    }
}

/// 장비 종류별 부하 프로파일 표를 출력한다.
pub fn handle_profiles(cfg: &Config, tr: &Translator) {
    println!("{}", tr.t(keys::LIST_PROFILES));
    for class in [EquipmentClass::StationaryGenerator, EquipmentClass::MobileEngine] {
        println!("  [{}] {}", class.key(), report::class_label(tr, class));
        for (label, fraction) in cfg.profiles_for(class).iter() {
            println!("    {label}: {:.0}%", fraction * 100.0);
        }
    }
}
