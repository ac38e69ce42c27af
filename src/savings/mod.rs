//! 기존/교체 조명 비교 합계와 투자 회수 계산 모듈 모음.

pub mod comparison;
pub mod payback;

pub use comparison::*;
pub use payback::*;
