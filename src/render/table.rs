use tracing::debug;

use crate::error::RenderError;
use crate::format;
use crate::gradient::{self, Rgba};
use crate::heating::{CostRow, CostTable};
use crate::render::canvas::Canvas;
use crate::render::font;
use crate::render::{RenderOptions, MAX_SCALE};

/// 고정 열 제목. 마지막 열 제목은 사용량 값에 따라 만들어진다.
pub const FIXED_HEADERS: [&str; 6] = [
    "SCOP",
    "1/SCOP",
    "1/SCOP as %",
    "System Type",
    "Fuel",
    "Cost per kWh of heating",
];

pub const COLUMN_COUNT: usize = 7;
pub const SYSTEM_TYPE_COLUMN: usize = 3;
/// 설명 열은 자동 폭의 1.5배로 넓힌다.
pub const SYSTEM_TYPE_WIDEN: f64 = 1.5;

/// 한 행의 표시 내용과 배경.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub cells: [String; COLUMN_COUNT],
    pub background: Rgba,
    pub bold: bool,
}

/// 픽셀 단위로 배치가 끝난 표. `rows[0]`은 머리글 행이다.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub rows: Vec<LayoutRow>,
    pub column_widths: [u32; COLUMN_COUNT],
    pub row_height: u32,
    pub margin: u32,
    pub line: u32,
    pub scale: u32,
}

impl TableLayout {
    pub fn width(&self) -> u32 {
        self.margin * 2 + self.column_widths.iter().sum::<u32>() + self.line
    }

    pub fn height(&self) -> u32 {
        self.margin * 2 + self.row_height * self.rows.len() as u32 + self.line
    }

    /// 셀 영역(x, y, w, h). 격자선 두께를 포함한다.
    pub fn cell_rect(&self, row: usize, col: usize) -> (u32, u32, u32, u32) {
        let x = self.margin + self.column_widths[..col].iter().sum::<u32>();
        let y = self.margin + self.row_height * row as u32;
        (x, y, self.column_widths[col], self.row_height)
    }

    pub fn header(&self) -> &LayoutRow {
        &self.rows[0]
    }

    pub fn data_rows(&self) -> &[LayoutRow] {
        &self.rows[1..]
    }
}

/// 한 데이터 행의 셀 문자열.
pub fn row_cells(row: &CostRow, currency_symbol: &str) -> [String; COLUMN_COUNT] {
    let s = row.system;
    [
        format::format_scop(s.scop),
        format::format_inverse_scop(s.inverse_scop),
        s.inverse_scop_percent.to_string(),
        s.system_type.to_string(),
        s.fuel.label().to_string(),
        format::format_pence(row.cost_per_kwh),
        format::format_currency(row.yearly_cost, currency_symbol),
    ]
}

/// 머리글 행의 셀 문자열.
pub fn header_cells(yearly_usage: f64) -> [String; COLUMN_COUNT] {
    let mut cells: [String; COLUMN_COUNT] = Default::default();
    for (cell, h) in cells.iter_mut().zip(FIXED_HEADERS) {
        *cell = h.to_string();
    }
    cells[COLUMN_COUNT - 1] = format::yearly_cost_header(yearly_usage);
    cells
}

/// 표의 행 내용, 행 색, 열 폭을 결정한다.
pub fn layout(table: &CostTable, options: &RenderOptions) -> TableLayout {
    let scale = options.scale.clamp(1, MAX_SCALE);
    let pad_x = options.cell_padding * scale;
    let pad_y = options.cell_padding * scale;
    let colors = gradient::row_colors_with(&options.gradient, table);

    let mut rows = Vec::with_capacity(table.rows.len() + 1);
    rows.push(LayoutRow {
        cells: header_cells(table.inputs.yearly_usage),
        background: Rgba::WHITE,
        bold: true,
    });
    for (row, color) in table.rows.iter().zip(colors) {
        rows.push(LayoutRow {
            cells: row_cells(row, &options.currency_symbol),
            background: color,
            bold: false,
        });
    }

    let mut column_widths = [0u32; COLUMN_COUNT];
    for row in &rows {
        for (w, cell) in column_widths.iter_mut().zip(&row.cells) {
            *w = (*w).max(font::text_width(cell, scale, row.bold) + 2 * pad_x);
        }
    }
    let natural = column_widths[SYSTEM_TYPE_COLUMN] as f64;
    column_widths[SYSTEM_TYPE_COLUMN] = (natural * SYSTEM_TYPE_WIDEN).round() as u32;

    TableLayout {
        rows,
        column_widths,
        row_height: font::text_height(scale) + 2 * pad_y,
        margin: options.margin * scale,
        line: (scale / 3).max(1),
        scale,
    }
}

/// 배치된 표를 캔버스에 그린다.
pub fn paint(layout: &TableLayout, grid_color: Rgba) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(layout.width(), layout.height(), Rgba::WHITE)?;
    debug!(
        width = canvas.width(),
        height = canvas.height(),
        scale = layout.scale,
        "painting cost table"
    );
    let th = font::text_height(layout.scale);

    for (r, row) in layout.rows.iter().enumerate() {
        for (c, cell) in row.cells.iter().enumerate() {
            let (x, y, w, h) = layout.cell_rect(r, c);
            canvas.fill_rect(x, y, w, h, row.background);
            let tw = font::text_width(cell, layout.scale, row.bold);
            let tx = x + w.saturating_sub(tw) / 2;
            let ty = y + h.saturating_sub(th) / 2;
            canvas.draw_text(tx, ty, cell, layout.scale, Rgba::BLACK, row.bold);
        }
    }

    let (left, top) = (layout.margin, layout.margin);
    let table_w = layout.width() - 2 * layout.margin;
    let table_h = layout.height() - 2 * layout.margin;
    for r in 0..=layout.rows.len() {
        let y = top + layout.row_height * r as u32;
        canvas.draw_hline(left, y, table_w, layout.line, grid_color);
    }
    let mut x = left;
    canvas.draw_vline(x, top, table_h, layout.line, grid_color);
    for w in layout.column_widths {
        x += w;
        canvas.draw_vline(x, top, table_h, layout.line, grid_color);
    }
    Ok(canvas)
}
