//! 누적 비용표와 손익분기 보간 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use led_efficiency_calculator::calculation::{self, CalculationRequest};
use led_efficiency_calculator::error::CalcError;
use led_efficiency_calculator::lighting::{FittingPair, FittingSpec, LampConstants, UsageProfile};
use led_efficiency_calculator::savings::{
    classify_break_even, compute_payback_schedule, find_break_even_year, simple_payback_years,
    AnnualCostBasis, BreakEven, ComparisonTotals, MAX_PAYBACK_YEARS, PaybackRequest,
};

const BASIS: AnnualCostBasis = AnnualCostBasis {
    existing: 1000.0,
    replacement: 400.0,
};

fn request(purchase_cost: f64, install_cost: f64, years: i64, rate: f64) -> PaybackRequest {
    PaybackRequest {
        purchase_cost,
        install_cost,
        years,
        annual_rate_increase: rate,
    }
}

#[test]
fn schedule_rows_follow_linear_inflation() {
    let rows = compute_payback_schedule(&request(500.0, 100.0, 5, 0.05), BASIS).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows.first().map(|r| r.year), Some(1));
    assert_eq!(rows.last().map(|r| r.year), Some(5));

    // 1년차는 인상 배수 1.0
    assert_abs_diff_eq!(rows[0].cumulative_existing_cost, 1000.0);
    assert_abs_diff_eq!(rows[0].cumulative_replacement_cost, 1000.0);
    // 3년차: 3 * (1 + 2 * 0.05) = 3.3
    assert_relative_eq!(rows[2].cumulative_existing_cost, 3300.0, max_relative = 1e-12);
    assert_relative_eq!(rows[2].cumulative_replacement_cost, 1320.0 + 600.0, max_relative = 1e-12);
    for row in &rows {
        assert_eq!(
            row.cost_difference,
            row.cumulative_existing_cost - row.cumulative_replacement_cost
        );
    }
}

#[test]
fn break_even_in_first_year_is_not_interpolated() {
    let rows = compute_payback_schedule(&request(500.0, 100.0, 5, 0.0), BASIS).unwrap();
    assert_eq!(rows[0].cost_difference, 0.0);
    assert_eq!(classify_break_even(&rows), BreakEven::NoPriorShortfall);
    assert_eq!(find_break_even_year(&rows), None);
}

#[test]
fn break_even_lands_exactly_on_a_year() {
    // y1: 1000 - 1600 = -600, y2: 2000 - 2000 = 0
    let rows = compute_payback_schedule(&request(1000.0, 200.0, 5, 0.0), BASIS).unwrap();
    assert_relative_eq!(find_break_even_year(&rows).unwrap(), 2.0, max_relative = 1e-12);
}

#[test]
fn break_even_is_interpolated_between_years() {
    // y1: -300, y2: +300
    let rows = compute_payback_schedule(&request(900.0, 0.0, 5, 0.0), BASIS).unwrap();
    assert_relative_eq!(find_break_even_year(&rows).unwrap(), 1.5, max_relative = 1e-12);

    // 인상률 5%: y1 -600, y2 2100 - 2040 = 60
    let rows = compute_payback_schedule(&request(1000.0, 200.0, 5, 0.05), BASIS).unwrap();
    let year = find_break_even_year(&rows).unwrap();
    assert_relative_eq!(year, 1.0 + 600.0 / 660.0, max_relative = 1e-9);
}

#[test]
fn never_paying_back_is_reported() {
    let basis = AnnualCostBasis {
        existing: 400.0,
        replacement: 450.0,
    };
    let rows = compute_payback_schedule(&request(100.0, 0.0, 20, 0.03), basis).unwrap();
    assert!(rows.iter().all(|r| r.cost_difference < 0.0));
    assert_eq!(classify_break_even(&rows), BreakEven::NotWithinHorizon);
    assert_eq!(find_break_even_year(&rows), None);
    assert_eq!(simple_payback_years(&request(100.0, 0.0, 20, 0.03), basis), None);
}

#[test]
fn break_even_year_stays_inside_horizon() {
    for investment in [650.0, 1234.5, 2999.0, 5400.0] {
        let req = request(investment, 0.0, 10, 0.02);
        let rows = compute_payback_schedule(&req, BASIS).unwrap();
        if let Some(year) = find_break_even_year(&rows) {
            assert!((1.0..=10.0).contains(&year), "investment={investment} year={year}");
        } else {
            panic!("investment {investment} should pay back within 10 years");
        }
    }
}

#[test]
fn empty_schedule_never_breaks_even() {
    assert_eq!(classify_break_even(&[]), BreakEven::NotWithinHorizon);
}

#[test]
fn longest_horizon_is_accepted() {
    let rows = compute_payback_schedule(&request(600.0, 0.0, MAX_PAYBACK_YEARS, 0.0), BASIS);
    assert_eq!(rows.map(|r| r.len()), Ok(100));
}

#[test]
fn simple_payback_divides_investment_by_saving() {
    let years = simple_payback_years(&request(900.0, 300.0, 10, 0.0), BASIS).unwrap();
    assert_relative_eq!(years, 2.0, max_relative = 1e-12);
}

#[test]
fn invalid_requests_are_rejected() {
    for req in [
        request(100.0, 0.0, 0, 0.0),
        request(100.0, 0.0, -3, 0.0),
        request(100.0, 0.0, MAX_PAYBACK_YEARS + 1, 0.0),
        request(-1.0, 0.0, 5, 0.0),
        request(0.0, -50.0, 5, 0.0),
        request(0.0, 0.0, 5, -0.01),
        request(f64::INFINITY, 0.0, 5, 0.0),
    ] {
        let err = compute_payback_schedule(&req, BASIS).unwrap_err();
        assert!(matches!(err, CalcError::InvalidPaybackRequest(_)), "{req:?}");
    }
}

#[test]
fn cost_basis_includes_relamp_cost() {
    let totals = ComparisonTotals {
        existing_annual_running_cost: 592.76,
        existing_annual_relamp_cost: 87.6,
        replacement_annual_running_cost: 183.96,
        ..ComparisonTotals::default()
    };
    let basis = AnnualCostBasis::from_totals(&totals);
    assert_relative_eq!(basis.existing, 680.36, max_relative = 1e-12);
    assert_relative_eq!(basis.replacement, 183.96, max_relative = 1e-12);
}

#[test]
fn batch_run_includes_payback_report() {
    let req = CalculationRequest {
        usage: UsageProfile::default(),
        pairs: vec![FittingPair::new(
            FittingSpec::new("T8 1500mm", 10, 58.0),
            FittingSpec::new("LED batten", 10, 18.0),
        )],
        constants: LampConstants::default(),
        payback: Some(request(450.0, 150.0, 5, 0.0)),
    };
    let report = calculation::run(&req).unwrap();
    let payback = report.payback.expect("payback requested");

    // 연간 비용: 기존 592.76 + 87.6, 교체 183.96 → 절감 496.4
    assert_relative_eq!(payback.existing_annual_cost, 680.36, max_relative = 1e-12);
    assert_relative_eq!(payback.replacement_annual_cost, 183.96, max_relative = 1e-12);
    assert_eq!(payback.schedule.len(), 5);
    // y1: 496.4 - 600 < 0, y2: 992.8 - 600 > 0
    let year = payback.break_even_year.unwrap();
    assert_relative_eq!(year, 1.0 + 103.6 / 496.4, max_relative = 1e-9);
    assert_eq!(payback.break_even, BreakEven::Year(year));
    assert_relative_eq!(
        payback.simple_payback_years.unwrap(),
        600.0 / 496.4,
        max_relative = 1e-9
    );
}

#[test]
fn batch_run_validates_payback_before_computing() {
    let req = CalculationRequest {
        usage: UsageProfile::default(),
        pairs: vec![],
        constants: LampConstants::default(),
        payback: Some(request(0.0, 0.0, 0, 0.0)),
    };
    assert!(matches!(
        calculation::run(&req),
        Err(CalcError::InvalidPaybackRequest(_))
    ));
}
