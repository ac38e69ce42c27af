//! 계산 결과를 콘솔용 표 또는 TOML 문서로 출력한다.

use std::fmt::Write;

use crate::calculation::{CalculationReport, PaybackReport};
use crate::currency::CurrencyFormat;
use crate::lighting::FittingResult;
use crate::messages::{self as msg, fill};
use crate::savings::BreakEven;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
}

/// 표시용 반올림(소수 둘째 자리).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 결과 전체를 TOML 문서로 직렬화한다.
pub fn render_toml(report: &CalculationReport) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(report)
}

/// 결과 전체를 콘솔 표로 만든다.
pub fn render_text(report: &CalculationReport, money: &CurrencyFormat) -> String {
    let mut out = String::new();
    out.push_str(msg::REPORT_HEADING);
    out.push('\n');

    out.push_str(msg::REPORT_EXISTING);
    out.push('\n');
    write_fitting_table(&mut out, &report.existing, true, money);
    out.push('\n');

    out.push_str(msg::REPORT_REPLACEMENT);
    out.push('\n');
    write_fitting_table(&mut out, &report.replacement, false, money);
    out.push('\n');

    let totals = &report.totals;
    let lines = [
        fill(
            msg::REPORT_KWH_REDUCTION,
            &[("value", format!("{:.2}", round2(totals.kwh_saving)))],
        ),
        fill(msg::REPORT_BILL_REDUCTION, &[("value", money.format(totals.cost_saving))]),
        fill(
            msg::REPORT_CO2_REDUCTION,
            &[("value", format!("{:.2}", round2(totals.co2_saving)))],
        ),
    ];
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }

    if let Some(ref payback) = report.payback {
        write_payback(&mut out, payback, money);
    }
    out
}

fn write_fitting_table(
    out: &mut String,
    rows: &[FittingResult],
    with_relamp: bool,
    money: &CurrencyFormat,
) {
    let _ = write!(
        out,
        "{:<24} {:>6} {:>8} {:>14} {:>16} {:>12}",
        msg::REPORT_COL_NAME,
        msg::REPORT_COL_QUANTITY,
        msg::REPORT_COL_WATTAGE,
        msg::REPORT_COL_KWH,
        msg::REPORT_COL_COST,
        msg::REPORT_COL_CO2,
    );
    if with_relamp {
        let _ = write!(out, " {:>14}", msg::REPORT_COL_RELAMP);
    }
    out.push('\n');

    for row in rows {
        let _ = write!(
            out,
            "{:<24} {:>6} {:>8.1} {:>14.2} {:>16} {:>12.3}",
            row.name,
            row.quantity,
            row.wattage,
            row.annual_kwh,
            money.format(row.annual_running_cost),
            row.annual_co2_tonnes,
        );
        if with_relamp {
            let relamp = row.annual_relamp_cost.unwrap_or(0.0);
            let _ = write!(out, " {:>14}", money.format(relamp));
        }
        out.push('\n');
    }

    let kwh: f64 = rows.iter().map(|r| r.annual_kwh).sum();
    let cost: f64 = rows.iter().map(|r| r.annual_running_cost).sum();
    let co2: f64 = rows.iter().map(|r| r.annual_co2_tonnes).sum();
    let _ = write!(
        out,
        "{:<24} {:>6} {:>8} {:>14.2} {:>16} {:>12.3}",
        msg::REPORT_TOTAL,
        "",
        "",
        kwh,
        money.format(cost),
        co2,
    );
    if with_relamp {
        let relamp: f64 = rows.iter().filter_map(|r| r.annual_relamp_cost).sum();
        let _ = write!(out, " {:>14}", money.format(relamp));
    }
    out.push('\n');
}

fn write_payback(out: &mut String, payback: &PaybackReport, money: &CurrencyFormat) {
    out.push_str(msg::REPORT_PAYBACK_HEADING);
    out.push('\n');
    out.push_str(&fill(
        msg::REPORT_INVESTMENT,
        &[("value", money.format(payback.request.investment()))],
    ));
    out.push('\n');

    let _ = writeln!(
        out,
        "{:>6} {:>18} {:>20} {:>16}",
        msg::REPORT_COL_YEAR,
        msg::REPORT_COL_CUM_EXISTING,
        msg::REPORT_COL_CUM_REPLACEMENT,
        msg::REPORT_COL_DIFFERENCE,
    );
    for row in &payback.schedule {
        let _ = writeln!(
            out,
            "{:>6} {:>18} {:>20} {:>16}",
            row.year,
            money.format(row.cumulative_existing_cost),
            money.format(row.cumulative_replacement_cost),
            money.format(row.cost_difference),
        );
    }

    let break_even = match payback.break_even {
        BreakEven::Year(year) => {
            fill(msg::REPORT_BREAK_EVEN_YEAR, &[("value", format!("{year:.2}"))])
        }
        BreakEven::NoPriorShortfall => msg::REPORT_BREAK_EVEN_NO_PRIOR.to_string(),
        BreakEven::NotWithinHorizon => msg::REPORT_BREAK_EVEN_NONE.to_string(),
    };
    out.push_str(&break_even);
    out.push('\n');

    let simple = match payback.simple_payback_years {
        Some(years) => fill(msg::REPORT_SIMPLE_PAYBACK, &[("value", format!("{years:.2}"))]),
        None => msg::REPORT_SIMPLE_PAYBACK_NONE.to_string(),
    };
    out.push_str(&simple);
    out.push('\n');
}
