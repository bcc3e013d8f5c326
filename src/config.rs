use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::heating::CostInputs;
use crate::render::DEFAULT_DPI;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 입력 한 개의 허용 범위(CLI 셸에서만 적용).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 양 끝이 유한하고 `min <= max`인지 여부.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// 범위 안으로 자른 값과, 잘렸는지 여부. 잘못된 범위면 값을 그대로 둔다.
    pub fn limit(&self, value: f64) -> (f64, bool) {
        if !self.is_valid() {
            return (value, false);
        }
        let limited = value.clamp(self.min, self.max);
        (limited, limited != value)
    }
}

/// 입력별 허용 범위.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    pub electricity_price: Range,
    pub gas_price: Range,
    pub oil_price: Range,
    pub yearly_usage: Range,
}

impl InputBounds {
    /// 모든 범위가 올바른지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("electricity_price", &self.electricity_price),
            ("gas_price", &self.gas_price),
            ("oil_price", &self.oil_price),
            ("yearly_usage", &self.yearly_usage),
        ];
        for (field, range) in ranges {
            if !range.is_valid() {
                return Err(ConfigError::InvalidBounds {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            electricity_price: Range::new(10.0, 40.0),
            gas_price: Range::new(2.0, 20.0),
            oil_price: Range::new(2.0, 20.0),
            yearly_usage: Range::new(5_000.0, 50_000.0),
        }
    }
}

/// 입력을 생략했을 때 쓰는 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultInputs {
    pub electricity_price: f64,
    pub gas_price: f64,
    pub oil_price: f64,
    pub yearly_usage: f64,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            electricity_price: 22.36,
            gas_price: 5.48,
            oil_price: 8.70,
            yearly_usage: 20_000.0,
        }
    }
}

impl From<&DefaultInputs> for CostInputs {
    fn from(d: &DefaultInputs) -> Self {
        CostInputs {
            electricity_price: d.electricity_price,
            gas_price: d.gas_price,
            oil_price: d.oil_price,
            yearly_usage: d.yearly_usage,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 연간 비용 통화 기호
    pub currency_symbol: String,
    /// 출력 해상도
    pub dpi: u32,
    pub defaults: DefaultInputs,
    pub bounds: InputBounds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "£".into(),
            dpi: DEFAULT_DPI,
            defaults: DefaultInputs::default(),
            bounds: InputBounds::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 입력 범위 설정 오류
    #[error("잘못된 입력 범위 bounds.{field}: min={min}, max={max}")]
    InvalidBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.bounds.validate()?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
