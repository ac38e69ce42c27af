use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalcError, FittingPosition, FittingSide};

/// 계산 1회 동안 고정되는 전역 사용 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageProfile {
    /// 하루 사용 시간 [h/day] (0~24)
    pub hours_per_day: f64,
    /// 연간 사용 일수 [day/year] (0~365)
    pub days_per_year: f64,
    /// 전력 단가 [통화/kWh]
    pub energy_rate: f64,
}

impl Default for UsageProfile {
    fn default() -> Self {
        Self {
            hours_per_day: 16.0,
            days_per_year: 365.0,
            energy_rate: 0.175,
        }
    }
}

impl UsageProfile {
    /// 연간 점등 시간 [h/year].
    pub fn annual_hours(&self) -> f64 {
        self.hours_per_day * self.days_per_year
    }

    /// 범위를 벗어난 사용 조건을 거부한다. 연간 점등 시간 0은 교체 주기 계산 시점에 검사한다.
    pub fn validate(&self) -> Result<(), CalcError> {
        if !self.hours_per_day.is_finite() || !(0.0..=24.0).contains(&self.hours_per_day) {
            return Err(CalcError::InvalidUsageProfile(
                "하루 사용 시간은 0~24 사이여야 합니다.",
            ));
        }
        if !self.days_per_year.is_finite() || !(0.0..=365.0).contains(&self.days_per_year) {
            return Err(CalcError::InvalidUsageProfile(
                "연간 사용 일수는 0~365 사이여야 합니다.",
            ));
        }
        if !self.energy_rate.is_finite() || self.energy_rate < 0.0 {
            return Err(CalcError::InvalidUsageProfile(
                "전력 단가는 0 이상이어야 합니다.",
            ));
        }
        Ok(())
    }
}

/// 램프 교체 및 탄소 배출 계산에 쓰는 상수. 설정 파일로 재정의할 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LampConstants {
    /// 정격 수명 [h]
    pub rated_life_hours: f64,
    /// 램프 단가 [통화/개]
    pub lamp_unit_cost: f64,
    /// 교체 1회 인건비 [통화/회]
    pub labour_cost_per_change: f64,
    /// 전력 탄소 배출 계수 [kgCO2/kWh]
    pub co2_factor_kg_per_kwh: f64,
}

impl Default for LampConstants {
    fn default() -> Self {
        Self {
            rated_life_hours: 5000.0,
            lamp_unit_cost: 2.5,
            labour_cost_per_change: 5.0,
            co2_factor_kg_per_kwh: 0.575,
        }
    }
}

impl LampConstants {
    pub fn validate(&self) -> Result<(), CalcError> {
        if !self.rated_life_hours.is_finite() || self.rated_life_hours <= 0.0 {
            return Err(CalcError::InvalidLampConstants(
                "정격 수명은 0보다 커야 합니다.",
            ));
        }
        let costs = [self.lamp_unit_cost, self.labour_cost_per_change];
        if costs.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(CalcError::InvalidLampConstants(
                "램프 단가와 인건비는 0 이상이어야 합니다.",
            ));
        }
        if !self.co2_factor_kg_per_kwh.is_finite() || self.co2_factor_kg_per_kwh < 0.0 {
            return Err(CalcError::InvalidLampConstants(
                "탄소 배출 계수는 0 이상이어야 합니다.",
            ));
        }
        Ok(())
    }
}

/// 조명기구 한 종류의 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingSpec {
    /// 제품명 (빈 문자열 허용)
    #[serde(default)]
    pub name: String,
    /// 수량 [개]
    pub quantity: i64,
    /// 기구당 소비전력 [W]
    pub wattage: f64,
}

impl FittingSpec {
    pub fn new(name: impl Into<String>, quantity: i64, wattage: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            wattage,
        }
    }

    /// 음수 수량/와트를 거부한다. 반환되는 오류에는 위치가 없으므로 호출 측에서 `at`으로 붙인다.
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.quantity < 0 {
            return Err(CalcError::InvalidFittingSpec {
                position: FittingPosition::Unplaced,
                reason: "수량은 0 이상이어야 합니다.",
            });
        }
        if !self.wattage.is_finite() || self.wattage < 0.0 {
            return Err(CalcError::InvalidFittingSpec {
                position: FittingPosition::Unplaced,
                reason: "와트는 0 이상이어야 합니다.",
            });
        }
        Ok(())
    }
}

/// 비교 한 행: 기존 조명기구와 이를 대체하는 조명기구.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingPair {
    pub existing: FittingSpec,
    pub replacement: FittingSpec,
}

impl FittingPair {
    pub fn new(existing: FittingSpec, replacement: FittingSpec) -> Self {
        Self {
            existing,
            replacement,
        }
    }

    /// 교체 수량을 지정하지 않으면 기존 수량을 그대로 쓴다.
    pub fn with_default_quantity(
        existing: FittingSpec,
        replacement_name: impl Into<String>,
        replacement_quantity: Option<i64>,
        replacement_wattage: f64,
    ) -> Self {
        let quantity = replacement_quantity.unwrap_or(existing.quantity);
        let replacement = FittingSpec::new(replacement_name, quantity, replacement_wattage);
        Self::new(existing, replacement)
    }

    pub fn spec(&self, side: FittingSide) -> &FittingSpec {
        match side {
            FittingSide::Existing => &self.existing,
            FittingSide::Replacement => &self.replacement,
        }
    }
}

/// 조명기구 한 종류의 연간 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingResult {
    pub name: String,
    pub quantity: i64,
    pub wattage: f64,
    /// 시간당 부하 [kW]
    pub kw_load_per_hour: f64,
    /// 연간 사용 전력량 [kWh]
    pub annual_kwh: f64,
    /// 연간 전기요금 [통화]
    pub annual_running_cost: f64,
    /// 연간 CO2 배출량 [t]
    pub annual_co2_tonnes: f64,
    /// 연간 램프 교체 횟수. 교체비를 계산하지 않은 경우 `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lamp_changes_per_year: Option<f64>,
    /// 연간 램프 교체비 [통화]. 교체비를 계산하지 않은 경우 `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_relamp_cost: Option<f64>,
}

impl FittingResult {
    /// 교체비를 포함한 연간 운영비. 교체비가 없으면 전기요금만.
    pub fn annual_total_cost(&self) -> f64 {
        self.annual_running_cost + self.annual_relamp_cost.unwrap_or(0.0)
    }
}

/// 조명기구 한 종류의 부하, 연간 전력량, 요금, CO2, (선택) 램프 교체비를 계산한다.
///
/// 연산 순서는 반올림 차이가 생기지 않도록 고정되어 있다.
/// `include_relamp`이 참이면 연간 점등 시간이 0일 때 교체 주기를 정의할 수 없으므로 오류를 반환한다.
pub fn compute_fitting_result(
    spec: &FittingSpec,
    usage: &UsageProfile,
    constants: &LampConstants,
    include_relamp: bool,
) -> Result<FittingResult, CalcError> {
    usage.validate()?;
    constants.validate()?;
    spec.validate()?;

    let annual_hours = usage.annual_hours();
    if include_relamp && annual_hours == 0.0 {
        return Err(CalcError::InvalidUsageProfile(
            "연간 점등 시간이 0이면 램프 교체 주기를 계산할 수 없습니다.",
        ));
    }

    let quantity = spec.quantity as f64;
    let kw_load_per_hour = (quantity * spec.wattage) / 1000.0;
    let annual_kwh = kw_load_per_hour * usage.hours_per_day * usage.days_per_year;
    let annual_running_cost = annual_kwh * usage.energy_rate;
    let annual_co2_tonnes = (usage.hours_per_day
        * usage.days_per_year
        * kw_load_per_hour
        * constants.co2_factor_kg_per_kwh)
        / 1000.0;

    let (lamp_changes_per_year, annual_relamp_cost) = if include_relamp {
        let changes = if spec.quantity == 0 {
            0.0
        } else {
            lamp_changes_per_year(constants.rated_life_hours, usage)
        };
        let cost =
            quantity * (constants.lamp_unit_cost + constants.labour_cost_per_change) * changes;
        (Some(changes), Some(cost))
    } else {
        (None, None)
    };

    debug!(
        name = %spec.name,
        kw_load_per_hour,
        annual_kwh,
        annual_running_cost,
        annual_co2_tonnes,
        "조명기구 계산 완료"
    );

    Ok(FittingResult {
        name: spec.name.clone(),
        quantity: spec.quantity,
        wattage: spec.wattage,
        kw_load_per_hour,
        annual_kwh,
        annual_running_cost,
        annual_co2_tonnes,
        lamp_changes_per_year,
        annual_relamp_cost,
    })
}

fn lamp_changes_per_year(rated_life_hours: f64, usage: &UsageProfile) -> f64 {
    1.0 / (rated_life_hours / usage.annual_hours())
}
