use std::io::{BufRead, Write};
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::config::{Config, ConfigError};
use crate::error::CalcError;
use crate::lighting::FittingPair;
use crate::messages as msg;
use crate::report;
use crate::savings::PaybackRequest;
use crate::scenario::ScenarioError;
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 시나리오 로드 오류
    #[error("{0}")]
    Scenario(#[from] ScenarioError),
    /// 계산 입력 검증 오류
    #[error("{0}")]
    Calc(#[from] CalcError),
    /// TOML 출력 오류
    #[error("결과 직렬화 오류: {0}")]
    Render(#[from] toml::ser::Error),
    /// 표준 입력이 닫힘
    #[error("입력이 종료되었습니다.")]
    InputClosed,
}

/// 대화형 입력 중인 조명기구 목록과 투자 회수 설정. 초기화 메뉴로 비운다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub pairs: Vec<FittingPair>,
    pub payback: Option<PaybackRequest>,
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 입력 검증 오류는 출력 후 메뉴로 돌아가고, 그 밖의 오류는 호출 측으로 전달한다.
pub fn run<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    config: &mut Config,
    config_path: &Path,
) -> Result<(), AppError> {
    let mut session = Session::default();
    loop {
        let choice = ui_cli::main_menu(con)?;
        let outcome = match choice {
            MenuChoice::Usage => ui_cli::handle_usage(con, config),
            MenuChoice::Fittings => ui_cli::handle_fittings(con, &mut session),
            MenuChoice::Payback => ui_cli::handle_payback(con, config, &mut session),
            MenuChoice::Calculate => ui_cli::handle_calculate(con, config, &session),
            MenuChoice::Reset => {
                session = Session::default();
                con.println(msg::RESET_DONE)
            }
            MenuChoice::Settings => ui_cli::handle_settings(con, config).and_then(|()| {
                config.save_to(config_path)?;
                con.println(msg::SETTINGS_SAVED)
            }),
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                con.println(msg::APP_EXIT)?;
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::Calc(e)) => {
                warn!(error = %e, "입력 검증 실패");
                con.println(&format!("{}: {e}", msg::ERROR_PREFIX))?;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// 시나리오 파일을 계산해 지정한 형식으로 출력한다.
pub fn run_scenario<W: Write>(
    out: &mut W,
    config: &Config,
    path: &Path,
    format: report::OutputFormat,
) -> Result<(), AppError> {
    let scenario = crate::scenario::Scenario::load(path)?;
    let request = scenario.into_request(config);
    let result = crate::calculation::run(&request)?;
    let text = match format {
        report::OutputFormat::Text => report::render_text(&result, &config.currency),
        report::OutputFormat::Toml => report::render_toml(&result)?,
    };
    writeln!(out, "{text}")?;
    Ok(())
}
