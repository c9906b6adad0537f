//! 연료 감사 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 같은 엔진을 쓴다.

pub mod app;
pub mod audit;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
