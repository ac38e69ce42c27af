//! 시나리오 파일, 설정 파일, 결과 출력 테스트.
use std::path::PathBuf;

use approx::assert_relative_eq;
use led_efficiency_calculator::calculation;
use led_efficiency_calculator::config::{self, Config};
use led_efficiency_calculator::error::CalcError;
use led_efficiency_calculator::messages as msg;
use led_efficiency_calculator::report::{self, OutputFormat};
use led_efficiency_calculator::savings::BreakEven;
use led_efficiency_calculator::scenario::Scenario;
use led_efficiency_calculator::{app, currency::CurrencyFormat};

const OFFICE: &str = r#"
[usage]
hours_per_day = 16
days_per_year = 365
energy_rate = 0.175

[[fittings]]
existing = { name = "T8 1500mm", quantity = 10, wattage = 58 }
replacement = { name = "LED batten", wattage = 18 }

[[fittings]]
existing = { name = "2D 28W", quantity = 6, wattage = 38 }
replacement = { name = "LED 2D", quantity = 4, wattage = 12.5 }

[payback]
purchase_cost = 450
install_cost = 150
years = 5
"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "led_efficiency_calculator_{}_{name}",
        std::process::id()
    ))
}

#[test]
fn scenario_fills_replacement_quantity() {
    let scenario = Scenario::from_toml_str(OFFICE).expect("parse");
    let request = scenario.into_request(&Config::default());
    assert_eq!(request.pairs.len(), 2);
    assert_eq!(request.pairs[0].replacement.quantity, 10);
    assert_eq!(request.pairs[1].replacement.quantity, 4);
    let payback = request.payback.expect("payback");
    assert_eq!(payback.years, 5);
    assert_eq!(payback.annual_rate_increase, 0.0);
}

#[test]
fn missing_sections_fall_back_to_config() {
    let src = r#"
[[fittings]]
existing = { quantity = 3, wattage = 70 }
replacement = { wattage = 20 }
"#;
    let mut cfg = Config::default();
    cfg.usage.energy_rate = 0.3;
    cfg.lamp.rated_life_hours = 8000.0;
    let request = Scenario::from_toml_str(src).unwrap().into_request(&cfg);
    assert_eq!(request.usage.energy_rate, 0.3);
    assert_eq!(request.constants.rated_life_hours, 8000.0);
    assert!(request.payback.is_none());
    assert_eq!(request.pairs[0].existing.name, "");
}

#[test]
fn malformed_scenario_is_a_parse_error() {
    let err = Scenario::from_toml_str("[[fittings]]\nexisting = 3\n").unwrap_err();
    assert!(err.to_string().contains("파싱"), "{err}");
}

#[test]
fn partial_usage_table_keeps_other_config_values() {
    let src = r#"
[usage]
energy_rate = 0.3

[lamp]
lamp_unit_cost = 4.0

[[fittings]]
existing = { quantity = 3, wattage = 70 }
replacement = { wattage = 20 }
"#;
    let mut cfg = Config::default();
    cfg.usage.hours_per_day = 10.0;
    cfg.usage.days_per_year = 250.0;
    cfg.lamp.rated_life_hours = 8000.0;
    let request = Scenario::from_toml_str(src).unwrap().into_request(&cfg);
    assert_eq!(request.usage.hours_per_day, 10.0);
    assert_eq!(request.usage.days_per_year, 250.0);
    assert_eq!(request.usage.energy_rate, 0.3);
    assert_eq!(request.constants.rated_life_hours, 8000.0);
    assert_eq!(request.constants.lamp_unit_cost, 4.0);
}

#[test]
fn negative_payback_years_fail_validation_not_parsing() {
    let src = r#"
[[fittings]]
existing = { quantity = 10, wattage = 58 }
replacement = { wattage = 18 }

[payback]
purchase_cost = 450
install_cost = 150
years = -1
"#;
    let request = Scenario::from_toml_str(src)
        .expect("negative years still parse")
        .into_request(&Config::default());
    assert_eq!(request.payback.map(|p| p.years), Some(-1));
    let err = calculation::run(&request).unwrap_err();
    assert!(matches!(err, CalcError::InvalidPaybackRequest(_)), "{err}");
}

#[test]
fn huge_payback_horizon_is_rejected() {
    let src = r#"
[[fittings]]
existing = { quantity = 10, wattage = 58 }
replacement = { wattage = 18 }

[payback]
purchase_cost = 450
install_cost = 150
years = 4294967295
"#;
    let request = Scenario::from_toml_str(src)
        .unwrap()
        .into_request(&Config::default());
    let err = calculation::run(&request).unwrap_err();
    assert!(matches!(err, CalcError::InvalidPaybackRequest(_)), "{err}");
}

#[test]
fn first_year_break_even_is_reported_without_a_year() {
    // 기존 1.25 kW, 교체 0.5 kW, 연간 1600 h, 0.5/kWh, 교체비 없음
    // → 연간 비용 1000 / 400, 투자비 600: 1년차 차액 0
    let src = r#"
[usage]
hours_per_day = 10
days_per_year = 160
energy_rate = 0.5

[lamp]
lamp_unit_cost = 0
labour_cost_per_change = 0

[[fittings]]
existing = { name = "SON 50", quantity = 25, wattage = 50 }
replacement = { name = "LED 20", wattage = 20 }

[payback]
purchase_cost = 500
install_cost = 100
years = 5
"#;
    let request = Scenario::from_toml_str(src)
        .unwrap()
        .into_request(&Config::default());
    let result = calculation::run(&request).unwrap();
    let payback = result.payback.as_ref().expect("payback requested");
    assert_eq!(payback.existing_annual_cost, 1000.0);
    assert_eq!(payback.replacement_annual_cost, 400.0);
    assert_eq!(payback.schedule[0].cost_difference, 0.0);
    assert_eq!(payback.break_even, BreakEven::NoPriorShortfall);
    assert_eq!(payback.break_even_year, None);

    let text = report::render_text(&result, &CurrencyFormat::default());
    assert!(text.contains(msg::REPORT_BREAK_EVEN_NO_PRIOR), "{text}");
    assert!(!text.contains("손익분기: 0"), "{text}");
    assert!(!text.contains("손익분기: 1"), "{text}");
}

#[test]
fn text_report_shows_savings_lines() {
    let request = Scenario::from_toml_str(OFFICE)
        .unwrap()
        .into_request(&Config::default());
    let result = calculation::run(&request).unwrap();
    let text = report::render_text(&result, &CurrencyFormat::default());

    assert!(text.contains(msg::REPORT_EXISTING));
    assert!(text.contains("T8 1500mm"));
    assert!(text.contains("LED batten"));
    assert!(text.contains("연간 전력량 절감:"));
    assert!(text.contains("연간 전기요금 절감: £"));
    assert!(text.contains("[투자 회수]"));
    assert!(text.contains("손익분기: "));
    assert!(text.contains("단순 회수기간: "));
}

#[test]
fn toml_report_round_trips_numbers() {
    let request = Scenario::from_toml_str(OFFICE)
        .unwrap()
        .into_request(&Config::default());
    let result = calculation::run(&request).unwrap();
    let doc = report::render_toml(&result).expect("serialize");
    let value: toml::Table = toml::from_str(&doc).expect("valid toml");

    let totals = value["totals"].as_table().unwrap();
    assert_relative_eq!(
        totals["kwh_saving"].as_float().unwrap(),
        result.totals.kwh_saving,
        max_relative = 1e-12
    );
    let existing = value["existing"].as_array().unwrap();
    assert_eq!(existing.len(), 2);
    assert!(existing[0].get("annual_relamp_cost").is_some());
    let replacement = value["replacement"].as_array().unwrap();
    assert!(replacement[0].get("annual_relamp_cost").is_none());
    let schedule = value["payback"]["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 5);
}

#[test]
fn run_scenario_reports_invalid_fitting() {
    let path = temp_path("bad_scenario.toml");
    std::fs::write(
        &path,
        "[[fittings]]\n\
         existing = { quantity = 3, wattage = -70 }\n\
         replacement = { wattage = 20 }\n",
    )
    .unwrap();
    let mut out = Vec::new();
    let err = app::run_scenario(
        &mut out,
        &Config::default(),
        &path,
        OutputFormat::Text,
    )
    .unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err, app::AppError::Calc(_)), "{err}");
    assert!(out.is_empty());
}

#[test]
fn config_is_created_then_reloaded() {
    let path = temp_path("config.toml");
    let _ = std::fs::remove_file(&path);

    let created = config::load_from(&path).expect("create default");
    assert_eq!(created, Config::default());
    assert!(path.exists());

    let mut changed = created;
    changed.usage.hours_per_day = 10.0;
    changed.currency.symbol = "€".into();
    changed.save_to(&path).unwrap();

    let reloaded = config::load_from(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(reloaded, changed);
}

#[test]
fn partial_config_uses_defaults() {
    let cfg: Config = toml::from_str("[lamp]\nlamp_unit_cost = 4.0\n").unwrap();
    assert_eq!(cfg.lamp.lamp_unit_cost, 4.0);
    assert_eq!(cfg.lamp.rated_life_hours, 5000.0);
    assert_eq!(cfg.usage.hours_per_day, 16.0);
}
