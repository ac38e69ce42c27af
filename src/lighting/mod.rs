//! 조명기구 단위의 부하·전력량·요금·탄소 계산 모듈.

pub mod fitting_metrics;

pub use fitting_metrics::*;
