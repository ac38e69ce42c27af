use std::fmt;

use thiserror::Error;

/// 비교 행에서 조명기구가 어느 쪽에 속하는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FittingSide {
    /// 기존 조명기구
    Existing,
    /// 교체 조명기구
    Replacement,
}

impl fmt::Display for FittingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FittingSide::Existing => write!(f, "기존"),
            FittingSide::Replacement => write!(f, "교체"),
        }
    }
}

/// 잘못된 조명기구 입력의 위치. 단독 계산 시에는 위치를 알 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FittingPosition {
    Unplaced,
    Row { index: usize, side: FittingSide },
}

impl fmt::Display for FittingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FittingPosition::Unplaced => Ok(()),
            FittingPosition::Row { index, side } => {
                write!(f, " ({}번째 {} 조명기구)", index + 1, side)
            }
        }
    }
}

/// 계산 엔진에서 발생 가능한 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 사용 시간/일수/전력 단가가 범위를 벗어났거나 교체 주기를 정의할 수 없음
    #[error("사용 조건 오류: {0}")]
    InvalidUsageProfile(&'static str),
    /// 램프 수명/단가/탄소 계수 재정의 값이 잘못됨
    #[error("램프 상수 오류: {0}")]
    InvalidLampConstants(&'static str),
    /// 수량 또는 와트가 음수이거나 유한하지 않음
    #[error("조명기구 입력 오류{position}: {reason}")]
    InvalidFittingSpec {
        position: FittingPosition,
        reason: &'static str,
    },
    /// 기존/교체 결과 목록 길이가 다름
    #[error("비교 목록 길이 불일치: 기존 {existing}개, 교체 {replacement}개")]
    InvalidComparisonSet { existing: usize, replacement: usize },
    /// 투자 회수 입력이 잘못됨
    #[error("투자 회수 입력 오류: {0}")]
    InvalidPaybackRequest(&'static str),
}

impl CalcError {
    /// 위치가 없는 조명기구 오류에 비교 행 위치를 붙인다. 다른 오류는 그대로 반환한다.
    pub fn at(self, index: usize, side: FittingSide) -> Self {
        match self {
            CalcError::InvalidFittingSpec {
                position: FittingPosition::Unplaced,
                reason,
            } => CalcError::InvalidFittingSpec {
                position: FittingPosition::Row { index, side },
                reason,
            },
            other => other,
        }
    }
}
