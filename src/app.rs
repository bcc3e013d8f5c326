use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{self, Config, Range};
use crate::error::CostTableError;
use crate::heating::{compute_cost_table, CostInputs};
use crate::render::{CostTableRenderer, RenderOptions};
use crate::ui_cli;

/// 난방 방식별 연간 운전비 비교표를 PNG로 만든다.
#[derive(Debug, Clone, Parser)]
#[command(name = "heating_cost_table", version)]
pub struct Args {
    /// 전기 단가 [p/kWh]
    #[arg(long, value_name = "P_PER_KWH", allow_negative_numbers = true)]
    pub electricity: Option<f64>,
    /// 가스 단가 [p/kWh]
    #[arg(long, value_name = "P_PER_KWH", allow_negative_numbers = true)]
    pub gas: Option<f64>,
    /// 등유 단가 [p/kWh]
    #[arg(long, value_name = "P_PER_KWH", allow_negative_numbers = true)]
    pub oil: Option<f64>,
    /// 연간 열 사용량 [kWh]
    #[arg(long, value_name = "KWH", allow_negative_numbers = true)]
    pub usage: Option<f64>,
    /// PNG 저장 경로. 없으면 임시 파일에 저장한다.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// 표를 터미널에도 출력
    #[arg(long)]
    pub print: bool,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// 표 계산/렌더링 오류
    #[error("{0}")]
    CostTable(#[from] CostTableError),
}

/// 슬라이더 범위처럼 입력을 설정 범위 안으로 제한한다.
/// 음수나 유한하지 않은 값은 그대로 두어 계산 단계에서 오류가 나게 한다.
fn limit(name: &str, value: f64, range: &Range) -> f64 {
    if !value.is_finite() || value < 0.0 {
        return value;
    }
    let (limited, clamped) = range.limit(value);
    if clamped {
        warn!(input = name, value, limited, min = range.min, max = range.max, "input outside range, clamped");
    }
    limited
}

/// 인자와 설정 기본값을 합쳐 계산 입력을 만든다.
pub fn resolve_inputs(args: &Args, cfg: &Config) -> CostInputs {
    let d = &cfg.defaults;
    let b = &cfg.bounds;
    CostInputs {
        electricity_price: limit(
            "electricity",
            args.electricity.unwrap_or(d.electricity_price),
            &b.electricity_price,
        ),
        gas_price: limit("gas", args.gas.unwrap_or(d.gas_price), &b.gas_price),
        oil_price: limit("oil", args.oil.unwrap_or(d.oil_price), &b.oil_price),
        yearly_usage: limit("usage", args.usage.unwrap_or(d.yearly_usage), &b.yearly_usage),
    }
}

/// 표를 계산해 PNG로 저장하고 저장 경로를 돌려준다.
pub fn run(args: &Args, cfg: &Config) -> Result<PathBuf, AppError> {
    let inputs = resolve_inputs(args, cfg);
    info!(
        electricity = inputs.electricity_price,
        gas = inputs.gas_price,
        oil = inputs.oil_price,
        usage = inputs.yearly_usage,
        "rendering cost table"
    );

    let renderer = CostTableRenderer::new(RenderOptions::from(cfg));
    if args.print {
        let table = compute_cost_table(inputs)?;
        ui_cli::print_table(&table, &cfg.currency_symbol)?;
    }

    let path = match &args.output {
        Some(path) => {
            renderer.render_to_file(&inputs, path)?;
            path.clone()
        }
        None => renderer.render_to_temp_file(&inputs)?,
    };
    Ok(path)
}

/// 설정 파일을 읽은 뒤 실행한다.
pub fn run_with_config_file(args: &Args) -> Result<PathBuf, AppError> {
    let cfg = config::load_or_default(&args.config)?;
    run(args, &cfg)
}
