use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CalcError;
use crate::lighting::FittingResult;

/// 기존/교체 조명기구 결과 합계와 절감량.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTotals {
    pub existing_annual_kwh: f64,
    pub replacement_annual_kwh: f64,
    pub existing_annual_running_cost: f64,
    pub replacement_annual_running_cost: f64,
    pub existing_annual_co2_tonnes: f64,
    pub replacement_annual_co2_tonnes: f64,
    /// 램프 교체비 합계. 교체비가 계산되지 않은 결과는 0으로 본다.
    pub existing_annual_relamp_cost: f64,
    pub replacement_annual_relamp_cost: f64,
    /// 연간 전력량 절감 [kWh]
    pub kwh_saving: f64,
    /// 연간 전기요금 절감 [통화]
    pub cost_saving: f64,
    /// 연간 CO2 절감 [t]
    pub co2_saving: f64,
}

impl ComparisonTotals {
    /// 기존 조명기구의 연간 운영비(전기요금 + 램프 교체비).
    pub fn existing_annual_cost(&self) -> f64 {
        self.existing_annual_running_cost + self.existing_annual_relamp_cost
    }

    /// 교체 조명기구의 연간 운영비(전기요금 + 램프 교체비).
    pub fn replacement_annual_cost(&self) -> f64 {
        self.replacement_annual_running_cost + self.replacement_annual_relamp_cost
    }
}

#[derive(Default)]
struct SideSums {
    kwh: f64,
    running_cost: f64,
    co2_tonnes: f64,
    relamp_cost: f64,
}

fn sum_side(results: &[FittingResult]) -> SideSums {
    results.iter().fold(SideSums::default(), |acc, r| SideSums {
        kwh: acc.kwh + r.annual_kwh,
        running_cost: acc.running_cost + r.annual_running_cost,
        co2_tonnes: acc.co2_tonnes + r.annual_co2_tonnes,
        relamp_cost: acc.relamp_cost + r.annual_relamp_cost.unwrap_or(0.0),
    })
}

/// 인덱스가 맞춰진 기존/교체 결과 목록을 합산하고 절감량(기존 - 교체)을 구한다.
pub fn aggregate(
    existing: &[FittingResult],
    replacement: &[FittingResult],
) -> Result<ComparisonTotals, CalcError> {
    if existing.len() != replacement.len() {
        return Err(CalcError::InvalidComparisonSet {
            existing: existing.len(),
            replacement: replacement.len(),
        });
    }

    let old = sum_side(existing);
    let new = sum_side(replacement);
    let totals = ComparisonTotals {
        existing_annual_kwh: old.kwh,
        replacement_annual_kwh: new.kwh,
        existing_annual_running_cost: old.running_cost,
        replacement_annual_running_cost: new.running_cost,
        existing_annual_co2_tonnes: old.co2_tonnes,
        replacement_annual_co2_tonnes: new.co2_tonnes,
        existing_annual_relamp_cost: old.relamp_cost,
        replacement_annual_relamp_cost: new.relamp_cost,
        kwh_saving: old.kwh - new.kwh,
        cost_saving: old.running_cost - new.running_cost,
        co2_saving: old.co2_tonnes - new.co2_tonnes,
    };
    info!(
        rows = existing.len(),
        kwh_saving = totals.kwh_saving,
        cost_saving = totals.cost_saving,
        co2_saving = totals.co2_saving,
        "비교 합계 계산 완료"
    );
    Ok(totals)
}
