//! 난방 방식별 운전비 비교표 계산 및 PNG 렌더링 라이브러리.
//! 핵심 계산은 순수 함수로 두고 CLI는 얇은 껍데기로만 사용한다.

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod gradient;
pub mod heating;
pub mod render;
pub mod ui_cli;

pub use error::{CostTableError, InputField, RenderError};
pub use heating::{compute_cost_table, CostInputs, CostRow, CostTable, Fuel, HeatingSystem};
pub use render::{render, CostTableRenderer, ImageArtifact, RenderOptions};
