//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면 계층에서도 재사용한다.

pub mod app;
pub mod calculation;
pub mod config;
pub mod currency;
pub mod error;
pub mod lighting;
pub mod messages;
pub mod report;
pub mod savings;
pub mod scenario;
pub mod ui_cli;
