//! 난방 방식 테이블과 운전비 계산 모듈 모음.

pub mod archetypes;
pub mod running_cost;

pub use archetypes::*;
pub use running_cost::*;
