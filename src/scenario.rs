//! TOML 시나리오 파일 입력.
//!
//! `[usage]`, `[lamp]`에서 생략한 항목은 설정 파일 값을 항목별로 따른다.
//!
//! ```toml
//! [usage]
//! hours_per_day = 16
//! days_per_year = 365
//! energy_rate = 0.175
//!
//! [[fittings]]
//! existing = { name = "T8 1500mm", quantity = 10, wattage = 58 }
//! replacement = { name = "LED batten", wattage = 18 }
//!
//! [payback]
//! purchase_cost = 450
//! install_cost = 150
//! years = 10
//! annual_rate_increase = 0.05
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::calculation::CalculationRequest;
use crate::config::Config;
use crate::lighting::{FittingPair, FittingSpec, LampConstants, UsageProfile};
use crate::savings::PaybackRequest;

/// 시나리오 로드 오류.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("시나리오 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("시나리오 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
}

/// 시나리오의 `[usage]` 표. 생략한 항목은 설정값을 따른다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_day: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_per_year: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_rate: Option<f64>,
}

impl UsageOverrides {
    pub fn apply(self, base: UsageProfile) -> UsageProfile {
        UsageProfile {
            hours_per_day: self.hours_per_day.unwrap_or(base.hours_per_day),
            days_per_year: self.days_per_year.unwrap_or(base.days_per_year),
            energy_rate: self.energy_rate.unwrap_or(base.energy_rate),
        }
    }
}

/// 시나리오의 `[lamp]` 표. 생략한 항목은 설정값을 따른다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LampOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_life_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lamp_unit_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labour_cost_per_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_factor_kg_per_kwh: Option<f64>,
}

impl LampOverrides {
    pub fn apply(self, base: LampConstants) -> LampConstants {
        LampConstants {
            rated_life_hours: self.rated_life_hours.unwrap_or(base.rated_life_hours),
            lamp_unit_cost: self.lamp_unit_cost.unwrap_or(base.lamp_unit_cost),
            labour_cost_per_change: self
                .labour_cost_per_change
                .unwrap_or(base.labour_cost_per_change),
            co2_factor_kg_per_kwh: self
                .co2_factor_kg_per_kwh
                .unwrap_or(base.co2_factor_kg_per_kwh),
        }
    }
}

/// 교체 조명기구 입력. 수량을 생략하면 기존 수량을 따른다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplacementInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    pub wattage: f64,
}

/// 시나리오의 비교 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingPairInput {
    pub existing: FittingSpec,
    pub replacement: ReplacementInput,
}

impl FittingPairInput {
    pub fn into_pair(self) -> FittingPair {
        FittingPair::with_default_quantity(
            self.existing,
            self.replacement.name,
            self.replacement.quantity,
            self.replacement.wattage,
        )
    }
}

/// 시나리오 파일 전체.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub usage: UsageOverrides,
    #[serde(default)]
    pub lamp: LampOverrides,
    #[serde(default)]
    pub fittings: Vec<FittingPairInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payback: Option<PaybackRequest>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(src: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(src)?)
    }

    /// 시나리오에 없는 사용 조건/램프 상수는 항목별로 설정값을 채워 계산 요청을 만든다.
    pub fn into_request(self, cfg: &Config) -> CalculationRequest {
        CalculationRequest {
            usage: self.usage.apply(cfg.usage),
            pairs: self
                .fittings
                .into_iter()
                .map(FittingPairInput::into_pair)
                .collect(),
            constants: self.lamp.apply(cfg.lamp),
            payback: self.payback,
        }
    }
}
