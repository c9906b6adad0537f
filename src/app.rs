use crate::audit::AuditError;
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::Translator;
use crate::ui_cli::{self, Cli, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 감사 계산 오류
    #[error("감사 계산 오류: {0}")]
    Audit(#[from] AuditError),
    /// 잘못된 명령행 조합
    #[error("사용법 오류: {0}")]
    Usage(String),
}

/// 명령행에서 선택된 작업을 실행한다.
pub fn run(cli: &Cli, config: &Config, tr: &Translator) -> Result<(), AppError> {
    match &cli.command {
        Command::Audit(cmd) => ui_cli::handle_audit(cmd, config, tr)?,
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => ui_cli::handle_convert(tr, kind, *value, from, to)?,
        Command::Presets => ui_cli::handle_presets(config, tr),
        Command::Profiles => ui_cli::handle_profiles(config, tr),
    }
    Ok(())
}
