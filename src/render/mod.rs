//! 운전비 표를 PNG 이미지로 그리는 렌더러.

pub mod canvas;
pub mod font;
pub mod table;

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use tracing::info;

use crate::config::Config;
use crate::error::{CostTableError, RenderError};
use crate::gradient::{Gradient, Rgba};
use crate::heating::{compute_cost_table, CostInputs, CostTable};

/// 기본 해상도. 글자 배율은 이 값에서 정해진다.
pub const DEFAULT_DPI: u32 = 200;

/// 글자 배율 상한. 캔버스 크기 계산이 넘치지 않게 한다.
pub const MAX_SCALE: u32 = 32;

/// 렌더링 옵션.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// 연간 비용 앞에 붙는 통화 기호
    pub currency_symbol: String,
    /// 5x7 글리프 확대 배율
    pub scale: u32,
    /// 셀 안쪽 여백(배율 적용 전 px)
    pub cell_padding: u32,
    /// 표 바깥 여백(배율 적용 전 px)
    pub margin: u32,
    pub grid_color: Rgba,
    pub gradient: Gradient,
}

impl RenderOptions {
    /// DPI에서 글자 배율을 정한다(72 DPI = 1배, 최대 `MAX_SCALE`).
    pub fn scale_for_dpi(dpi: u32) -> u32 {
        ((dpi as f64 / 72.0).round() as u32).clamp(1, MAX_SCALE)
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.scale = Self::scale_for_dpi(dpi);
        self
    }

    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "£".into(),
            scale: Self::scale_for_dpi(DEFAULT_DPI),
            cell_padding: 4,
            margin: 4,
            grid_color: Rgba::BLACK,
            gradient: Gradient::cost(),
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(cfg: &Config) -> Self {
        RenderOptions::default()
            .with_dpi(cfg.dpi)
            .with_currency(cfg.currency_symbol.clone())
    }
}

/// 렌더링 결과물: PNG 바이트와 크기.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageArtifact {
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// PNG를 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        fs::write(path, &self.png)?;
        info!(path = %path.display(), bytes = self.png.len(), "cost table written");
        Ok(())
    }
}

/// 네 개의 입력값으로 운전비 표 이미지를 만든다.
#[derive(Debug, Clone, Default)]
pub struct CostTableRenderer {
    options: RenderOptions,
}

impl CostTableRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// 전기/가스/등유 단가[p/kWh]와 연간 사용량[kWh]으로 표 이미지를 만든다.
    pub fn render(
        &self,
        electricity_price: f64,
        gas_price: f64,
        oil_price: f64,
        yearly_usage: f64,
    ) -> Result<ImageArtifact, CostTableError> {
        let inputs = CostInputs::new(electricity_price, gas_price, oil_price, yearly_usage)?;
        self.render_inputs(&inputs)
    }

    pub fn render_inputs(&self, inputs: &CostInputs) -> Result<ImageArtifact, CostTableError> {
        let table = compute_cost_table(*inputs)?;
        Ok(self.render_table(&table)?)
    }

    /// 이미 계산된 표를 그린다.
    pub fn render_table(&self, table: &CostTable) -> Result<ImageArtifact, RenderError> {
        let layout = table::layout(table, &self.options);
        let canvas = table::paint(&layout, self.options.grid_color)?;
        encode_png(canvas)
    }

    /// 표를 그려 `path`에 저장한다.
    pub fn render_to_file(
        &self,
        inputs: &CostInputs,
        path: &Path,
    ) -> Result<ImageArtifact, CostTableError> {
        let artifact = self.render_inputs(inputs)?;
        artifact.save(path)?;
        Ok(artifact)
    }

    /// 표를 임시 `.png` 파일로 저장하고 경로를 돌려준다. 파일 삭제는 호출자 책임이다.
    pub fn render_to_temp_file(&self, inputs: &CostInputs) -> Result<PathBuf, CostTableError> {
        let artifact = self.render_inputs(inputs)?;
        let mut file = tempfile::Builder::new()
            .prefix("heating_cost_table_")
            .suffix(".png")
            .tempfile()
            .map_err(RenderError::from)?;
        std::io::Write::write_all(&mut file, artifact.png_bytes()).map_err(RenderError::from)?;
        let (_, path) = file.keep().map_err(|e| RenderError::Io(e.error))?;
        info!(path = %path.display(), "cost table written to temporary file");
        Ok(path)
    }
}

/// 기본 옵션으로 표 이미지를 만든다.
pub fn render(
    electricity_price: f64,
    gas_price: f64,
    oil_price: f64,
    yearly_usage: f64,
) -> Result<ImageArtifact, CostTableError> {
    CostTableRenderer::default().render(electricity_price, gas_price, oil_price, yearly_usage)
}

fn encode_png(canvas: canvas::Canvas) -> Result<ImageArtifact, RenderError> {
    let img = canvas.into_image();
    let (width, height) = img.dimensions();
    let mut png = Vec::new();
    PngEncoder::new(Cursor::new(&mut png)).write_image(
        img.as_raw(),
        width,
        height,
        ColorType::Rgba8,
    )?;
    Ok(ImageArtifact { png, width, height })
}
