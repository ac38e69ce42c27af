//! 사용 조건과 조명기구 목록으로부터 비교 결과 전체를 만드는 일괄 계산.

use serde::Serialize;
use tracing::info;

use crate::error::{CalcError, FittingSide};
use crate::lighting::{
    compute_fitting_result, FittingPair, FittingResult, LampConstants, UsageProfile,
};
use crate::savings::{
    aggregate, classify_break_even, compute_payback_schedule, simple_payback_years,
    AnnualCostBasis, BreakEven, ComparisonTotals, PaybackRequest, PaybackRow,
};

/// 1회 계산 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub usage: UsageProfile,
    pub pairs: Vec<FittingPair>,
    pub constants: LampConstants,
    /// `None`이면 투자 회수 계산을 생략한다.
    pub payback: Option<PaybackRequest>,
}

/// 투자 회수 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaybackReport {
    pub request: PaybackRequest,
    /// 기존 연간 비용 [통화/년]
    pub existing_annual_cost: f64,
    /// 교체 연간 비용 [통화/년]
    pub replacement_annual_cost: f64,
    #[serde(skip)]
    pub break_even: BreakEven,
    pub break_even_year: Option<f64>,
    pub simple_payback_years: Option<f64>,
    pub schedule: Vec<PaybackRow>,
}

/// 1회 계산 결과 전체.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationReport {
    pub usage: UsageProfile,
    pub totals: ComparisonTotals,
    pub existing: Vec<FittingResult>,
    pub replacement: Vec<FittingResult>,
    pub payback: Option<PaybackReport>,
}

/// 모든 입력을 먼저 검증한 뒤 조명기구별 결과, 합계, (선택) 투자 회수를 계산한다.
///
/// 오류가 있으면 처음 발견된 위반만 반환하며 부분 결과는 만들지 않는다.
/// 기존 조명기구만 램프 교체비를 포함한다.
pub fn run(request: &CalculationRequest) -> Result<CalculationReport, CalcError> {
    validate(request)?;

    let mut existing = Vec::with_capacity(request.pairs.len());
    let mut replacement = Vec::with_capacity(request.pairs.len());
    for (index, pair) in request.pairs.iter().enumerate() {
        existing.push(
            compute_fitting_result(&pair.existing, &request.usage, &request.constants, true)
                .map_err(|e| e.at(index, FittingSide::Existing))?,
        );
        replacement.push(
            compute_fitting_result(&pair.replacement, &request.usage, &request.constants, false)
                .map_err(|e| e.at(index, FittingSide::Replacement))?,
        );
    }

    let totals = aggregate(&existing, &replacement)?;
    let payback = match request.payback {
        Some(ref payback_request) => Some(payback_report(payback_request, &totals)?),
        None => None,
    };

    info!(
        fittings = request.pairs.len(),
        payback = payback.is_some(),
        "계산 완료"
    );
    Ok(CalculationReport {
        usage: request.usage,
        totals,
        existing,
        replacement,
        payback,
    })
}

fn validate(request: &CalculationRequest) -> Result<(), CalcError> {
    request.usage.validate()?;
    if request.usage.annual_hours() == 0.0 {
        return Err(CalcError::InvalidUsageProfile(
            "연간 점등 시간이 0이면 램프 교체 주기를 계산할 수 없습니다.",
        ));
    }
    request.constants.validate()?;
    if let Some(ref payback) = request.payback {
        payback.validate()?;
    }
    for (index, pair) in request.pairs.iter().enumerate() {
        for side in [FittingSide::Existing, FittingSide::Replacement] {
            pair.spec(side).validate().map_err(|e| e.at(index, side))?;
        }
    }
    Ok(())
}

fn payback_report(
    request: &PaybackRequest,
    totals: &ComparisonTotals,
) -> Result<PaybackReport, CalcError> {
    let basis = AnnualCostBasis::from_totals(totals);
    let schedule = compute_payback_schedule(request, basis)?;
    let break_even = classify_break_even(&schedule);
    Ok(PaybackReport {
        request: *request,
        existing_annual_cost: basis.existing,
        replacement_annual_cost: basis.replacement,
        break_even,
        break_even_year: break_even.year(),
        simple_payback_years: simple_payback_years(request, basis),
        schedule,
    })
}
