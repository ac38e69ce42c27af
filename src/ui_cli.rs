use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::app::{AppError, Session};
use crate::calculation::{self, CalculationRequest};
use crate::config::Config;
use crate::error::FittingSide;
use crate::lighting::{FittingPair, FittingSpec};
use crate::messages::{self as msg, fill};
use crate::report;
use crate::savings::PaybackRequest;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Usage,
    Fittings,
    Payback,
    Calculate,
    Reset,
    Settings,
    Exit,
}

/// 콘솔 입출력 묶음. 테스트에서는 메모리 버퍼로 대체한다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    /// 숫자를 읽는다. 빈 입력이면 기본값을 돌려준다.
    fn read_number<T>(&mut self, label: &str, default: T) -> Result<T, AppError>
    where
        T: FromStr + Copy + std::fmt::Display,
    {
        let hint = fill(msg::INPUT_DEFAULT_HINT, &[("default", default.to_string())]);
        let prompt = format!("{label}{hint}: ");
        loop {
            let s = self.read_line(&prompt)?;
            if s.is_empty() {
                return Ok(default);
            }
            match s.parse::<T>() {
                Ok(v) => return Ok(v),
                Err(_) => self.println(msg::ERROR_INVALID_NUMBER)?,
            }
        }
    }
}

/// 한 번에 입력할 수 있는 조명기구 종류 수 상한.
pub const MAX_FITTING_TYPES: usize = 100;

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(con: &mut Console<R, W>) -> Result<MenuChoice, AppError> {
    for line in msg::MAIN_MENU {
        con.println(line)?;
    }
    loop {
        let sel = con.read_line(msg::PROMPT_MENU_SELECT)?;
        match sel.as_str() {
            "1" => return Ok(MenuChoice::Usage),
            "2" => return Ok(MenuChoice::Fittings),
            "3" => return Ok(MenuChoice::Payback),
            "4" => return Ok(MenuChoice::Calculate),
            "5" => return Ok(MenuChoice::Reset),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => con.println(msg::INVALID_SELECTION_RETRY)?,
        }
    }
}

fn symbol_vars(cfg: &Config) -> [(&'static str, String); 1] {
    [("symbol", cfg.currency.symbol.clone())]
}

/// 전역 사용 조건(시간/일수/단가)을 입력받는다. 입력값은 설정 기본값으로 저장된다.
pub fn handle_usage<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    cfg: &mut Config,
) -> Result<(), AppError> {
    con.println(msg::USAGE_HEADING)?;
    let mut usage = cfg.usage;
    usage.hours_per_day = con.read_number(msg::PROMPT_USAGE_HOURS, usage.hours_per_day)?;
    usage.days_per_year = con.read_number(msg::PROMPT_USAGE_DAYS, usage.days_per_year)?;
    let rate_label = fill(msg::PROMPT_ENERGY_RATE, &symbol_vars(cfg));
    usage.energy_rate = con.read_number(&rate_label, usage.energy_rate)?;
    usage.validate()?;
    cfg.usage = usage;
    Ok(())
}

/// 조명기구 종류 수를 받고 기존/교체 조명기구를 차례로 입력받는다.
pub fn handle_fittings<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    session: &mut Session,
) -> Result<(), AppError> {
    con.println(msg::FITTINGS_HEADING)?;
    let count = loop {
        let count: usize = con.read_number(msg::PROMPT_FITTING_COUNT, 1)?;
        if count <= MAX_FITTING_TYPES {
            break count;
        }
        let max = [("max", MAX_FITTING_TYPES.to_string())];
        con.println(&fill(msg::FITTING_COUNT_RANGE, &max))?;
    };

    let mut pairs = Vec::new();
    for i in 0..count {
        let n = [("n", (i + 1).to_string())];

        con.println(&fill(msg::FITTINGS_EXISTING_HEADING, &n))?;
        let existing = read_fitting(con, 0)?;
        existing.validate().map_err(|e| e.at(i, FittingSide::Existing))?;

        con.println(&fill(msg::FITTINGS_REPLACEMENT_HEADING, &n))?;
        let default_quantity = existing.quantity;
        let replacement = read_fitting(con, default_quantity)?;
        replacement
            .validate()
            .map_err(|e| e.at(i, FittingSide::Replacement))?;

        pairs.push(FittingPair::new(existing, replacement));
    }
    session.pairs = pairs;
    con.println(&fill(msg::FITTINGS_ENTERED, &[("n", count.to_string())]))?;
    Ok(())
}

fn read_fitting<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    default_quantity: i64,
) -> Result<FittingSpec, AppError> {
    let name = con.read_line(msg::PROMPT_FITTING_NAME)?;
    let quantity = con.read_number(msg::PROMPT_FITTING_QUANTITY, default_quantity)?;
    let wattage = con.read_number(msg::PROMPT_FITTING_WATTAGE, 0.0)?;
    Ok(FittingSpec::new(name, quantity, wattage))
}

/// 투자 회수 계산 사용 여부와 구매비/설치비/기간/인상률을 입력받는다.
pub fn handle_payback<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    cfg: &Config,
    session: &mut Session,
) -> Result<(), AppError> {
    con.println(msg::PAYBACK_HEADING)?;
    let enable = con.read_line(msg::PROMPT_PAYBACK_ENABLE)?;
    if !matches!(enable.to_lowercase().as_str(), "y" | "yes" | "예") {
        session.payback = None;
        con.println(msg::PAYBACK_DISABLED)?;
        return Ok(());
    }

    let current = session.payback.unwrap_or_default();
    let vars = symbol_vars(cfg);
    let purchase_label = fill(msg::PROMPT_PURCHASE_COST, &vars);
    let install_label = fill(msg::PROMPT_INSTALL_COST, &vars);
    let purchase_cost = con.read_number(&purchase_label, current.purchase_cost)?;
    let install_cost = con.read_number(&install_label, current.install_cost)?;
    let years = con.read_number(msg::PROMPT_PAYBACK_YEARS, current.years)?;
    let percent = con.read_number(msg::PROMPT_RATE_INCREASE, current.annual_rate_increase * 100.0)?;
    let request = PaybackRequest {
        purchase_cost,
        install_cost,
        years,
        annual_rate_increase: percent / 100.0,
    };
    request.validate()?;
    session.payback = Some(request);
    Ok(())
}

/// 현재 입력으로 계산을 실행하고 결과 표를 출력한다.
pub fn handle_calculate<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    cfg: &Config,
    session: &Session,
) -> Result<(), AppError> {
    if session.pairs.is_empty() {
        con.println(msg::CALC_NO_FITTINGS)?;
        return Ok(());
    }
    let request = CalculationRequest {
        usage: cfg.usage,
        pairs: session.pairs.clone(),
        constants: cfg.lamp,
        payback: session.payback,
    };
    let result = calculation::run(&request)?;
    con.println(&report::render_text(&result, &cfg.currency))?;
    Ok(())
}

/// 설정 메뉴를 처리한다. 램프 상수와 통화 기호를 바꿀 수 있다.
pub fn handle_settings<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    cfg: &mut Config,
) -> Result<(), AppError> {
    con.println(msg::SETTINGS_HEADING)?;
    con.println(msg::SETTINGS_OPTIONS)?;
    let sel = con.read_line(msg::PROMPT_MENU_SELECT)?;
    match sel.as_str() {
        "1" => {
            let vars = symbol_vars(cfg);
            let mut lamp = cfg.lamp;
            lamp.rated_life_hours = con.read_number(msg::PROMPT_RATED_LIFE, lamp.rated_life_hours)?;
            let label = fill(msg::PROMPT_LAMP_COST, &vars);
            lamp.lamp_unit_cost = con.read_number(&label, lamp.lamp_unit_cost)?;
            let label = fill(msg::PROMPT_LABOUR_COST, &vars);
            lamp.labour_cost_per_change = con.read_number(&label, lamp.labour_cost_per_change)?;
            lamp.co2_factor_kg_per_kwh =
                con.read_number(msg::PROMPT_CO2_FACTOR, lamp.co2_factor_kg_per_kwh)?;
            lamp.validate()?;
            cfg.lamp = lamp;
        }
        "2" => {
            let symbol = con.read_line(msg::PROMPT_CURRENCY_SYMBOL)?;
            if !symbol.is_empty() {
                cfg.currency.symbol = symbol;
            }
        }
        _ => con.println(msg::INVALID_SELECTION_RETRY)?,
    }
    Ok(())
}
