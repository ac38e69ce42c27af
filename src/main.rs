use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use led_efficiency_calculator::{app, config, report::OutputFormat, ui_cli::Console};

/// 기존 조명을 LED로 교체할 때의 전력량·요금·탄소 절감과 투자 회수를 계산한다.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 시나리오 파일(TOML). 지정하면 계산 결과만 출력하고 종료한다.
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    /// 시나리오 결과 출력 형식
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// 설정 파일 경로
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match try_run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: Args) -> Result<(), app::AppError> {
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));
    let mut cfg = config::load_from(&config_path)?;

    match args.scenario {
        Some(path) => app::run_scenario(&mut io::stdout(), &cfg, &path, args.format),
        None => app::run(&mut Console::stdio(), &mut cfg, &config_path),
    }
}
