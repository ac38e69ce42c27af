use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CalcError;
use crate::savings::comparison::ComparisonTotals;

/// 분석 기간 상한 [년].
pub const MAX_PAYBACK_YEARS: i64 = 100;

const YEARS_OUT_OF_RANGE: &str = "분석 기간은 1~100년이어야 합니다.";

/// 투자 회수 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaybackRequest {
    /// 교체 조명기구 구매비 [통화]
    pub purchase_cost: f64,
    /// 설치비 [통화]
    pub install_cost: f64,
    /// 분석 기간 [년]. 음수도 받아서 검증 단계에서 거부한다.
    pub years: i64,
    /// 연간 요금 인상률(%) -> 소수 (0.05 = 5%)
    #[serde(default)]
    pub annual_rate_increase: f64,
}

impl Default for PaybackRequest {
    fn default() -> Self {
        Self {
            purchase_cost: 0.0,
            install_cost: 0.0,
            years: 10,
            annual_rate_increase: 0.0,
        }
    }
}

impl PaybackRequest {
    /// 초기 투자비(구매비 + 설치비).
    pub fn investment(&self) -> f64 {
        self.purchase_cost + self.install_cost
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        if !(1..=MAX_PAYBACK_YEARS).contains(&self.years) {
            return Err(CalcError::InvalidPaybackRequest(YEARS_OUT_OF_RANGE));
        }
        let costs = [self.purchase_cost, self.install_cost];
        if costs.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(CalcError::InvalidPaybackRequest(
                "구매비와 설치비는 0 이상이어야 합니다.",
            ));
        }
        if !self.annual_rate_increase.is_finite() || self.annual_rate_increase < 0.0 {
            return Err(CalcError::InvalidPaybackRequest(
                "연간 인상률은 0 이상이어야 합니다.",
            ));
        }
        Ok(())
    }
}

/// 누적 비용 곡선의 기준이 되는 연간 비용.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualCostBasis {
    /// 기존 조명기구 연간 비용 [통화/년]
    pub existing: f64,
    /// 교체 조명기구 연간 비용 [통화/년]
    pub replacement: f64,
}

impl AnnualCostBasis {
    /// 합계의 연간 운영비(전기요금 + 램프 교체비)를 기준으로 삼는다.
    pub fn from_totals(totals: &ComparisonTotals) -> Self {
        Self {
            existing: totals.existing_annual_cost(),
            replacement: totals.replacement_annual_cost(),
        }
    }

    pub fn annual_saving(&self) -> f64 {
        self.existing - self.replacement
    }
}

/// 연도별 누적 비용 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaybackRow {
    /// 1부터 시작하는 연도
    pub year: u32,
    pub cumulative_existing_cost: f64,
    /// 구매비 + 설치비 포함
    pub cumulative_replacement_cost: f64,
    /// 기존 - 교체
    pub cost_difference: f64,
}

/// 손익분기 탐색 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BreakEven {
    /// 직전 연도와 선형 보간한 손익분기 시점 [년]
    Year(f64),
    /// 첫 해부터 차액이 0 이상이라 보간할 직전 지점이 없음
    NoPriorShortfall,
    /// 분석 기간 안에 회수되지 않음
    NotWithinHorizon,
}

impl BreakEven {
    pub fn year(&self) -> Option<f64> {
        match self {
            BreakEven::Year(y) => Some(*y),
            _ => None,
        }
    }
}

/// 연도별 누적 비용표를 만든다.
///
/// 인상률은 경과 연수(i)에 선형으로 곱해지며 기존/교체 양쪽에 같은 배수를 쓴다.
pub fn compute_payback_schedule(
    request: &PaybackRequest,
    basis: AnnualCostBasis,
) -> Result<Vec<PaybackRow>, CalcError> {
    request.validate()?;
    let years = u32::try_from(request.years)
        .map_err(|_| CalcError::InvalidPaybackRequest(YEARS_OUT_OF_RANGE))?;
    if !basis.existing.is_finite() || !basis.replacement.is_finite() {
        return Err(CalcError::InvalidPaybackRequest(
            "연간 비용이 유한한 값이 아닙니다.",
        ));
    }

    let rows = (0..years)
        .map(|i| {
            let elapsed = f64::from(i);
            let years_run = elapsed + 1.0;
            let multiplier = 1.0 + elapsed * request.annual_rate_increase;
            let cumulative_existing_cost = basis.existing * years_run * multiplier;
            let cumulative_replacement_cost = basis.replacement * years_run * multiplier
                + request.purchase_cost
                + request.install_cost;
            let row = PaybackRow {
                year: i + 1,
                cumulative_existing_cost,
                cumulative_replacement_cost,
                cost_difference: cumulative_existing_cost - cumulative_replacement_cost,
            };
            debug!(year = row.year, diff = row.cost_difference, "누적 비용 행");
            row
        })
        .collect::<Vec<_>>();
    debug!(investment = request.investment(), years, "누적 비용표 생성 완료");
    Ok(rows)
}

/// 차액이 처음 0 이상이 되는 연도를 찾고 직전 연도와 선형 보간한다.
pub fn classify_break_even(schedule: &[PaybackRow]) -> BreakEven {
    let Some(pos) = schedule.iter().position(|row| row.cost_difference >= 0.0) else {
        return BreakEven::NotWithinHorizon;
    };
    if pos == 0 {
        return BreakEven::NoPriorShortfall;
    }
    let prev = &schedule[pos - 1];
    let curr = &schedule[pos];
    let fraction = -prev.cost_difference / (curr.cost_difference - prev.cost_difference);
    BreakEven::Year(f64::from(prev.year) + fraction)
}

/// 손익분기 연도(소수). 보간할 수 없거나 기간 내 회수되지 않으면 `None`.
pub fn find_break_even_year(schedule: &[PaybackRow]) -> Option<f64> {
    let outcome = classify_break_even(schedule);
    if outcome == BreakEven::NotWithinHorizon {
        warn!(years = schedule.len(), "분석 기간 내 투자 회수 불가");
    }
    outcome.year()
}

/// 단순 회수기간 = 초기 투자비 / 연간 절감액. 절감액이 0 이하이면 `None`.
pub fn simple_payback_years(request: &PaybackRequest, basis: AnnualCostBasis) -> Option<f64> {
    let saving = basis.annual_saving();
    if saving > 0.0 {
        Some(request.investment() / saving)
    } else {
        None
    }
}
