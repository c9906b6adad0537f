use std::process::ExitCode;

use clap::Parser;
use diesel_audit_toolbox::config;
use diesel_audit_toolbox::i18n::{self, Translator};
use diesel_audit_toolbox::ui_cli::Cli;
use diesel_audit_toolbox::app;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택된 명령을 실행한다.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        // 설정 로드 전일 수 있어 CLI 언어만 본다.
        let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
        eprintln!("{} {err}", tr.t(i18n::keys::ERROR_PREFIX));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = match cli.config.as_deref() {
        Some(path) => config::load_or_create(path)?,
        None => config::load_or_default()?,
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());
    log::debug!("language {}", tr.language_code());
    app::run(cli, &cfg, &tr)
}
