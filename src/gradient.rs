//! 연간 비용 크기에 따라 행 배경색을 정하는 녹색→노랑→빨강 그라데이션.

use crate::heating::CostTable;

/// 비용 정규화 값에 적용하는 지수. 1보다 작아 중간 구간이 붉은 쪽으로 당겨진다.
pub const COST_CURVE_EXPONENT: f64 = 0.6;

/// 행 배경의 고정 알파값.
pub const ROW_ALPHA: f64 = 0.7;

/// 모든 비용이 같을 때 쓰는 정규화 값(그라데이션 중앙, 연노랑).
pub const DEGENERATE_POSITION: f64 = 0.5;

/// 0~1 범위 RGBA 색.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// 8비트 RGBA로 변환한다.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// 일정 간격으로 배치된 색 정지점 사이를 선형 보간한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Rgba>,
}

impl Gradient {
    /// 비용용 7단계 그라데이션: 진녹 → 연녹 → 옅은 녹 → 옅은 노랑 → 연주황 → 주홍 → 빨강
    pub fn cost() -> Self {
        Self {
            stops: vec![
                Rgba::opaque(0x00, 0xA0, 0x00),
                Rgba::opaque(0x40, 0xC0, 0x40),
                Rgba::opaque(0x80, 0xE0, 0x80),
                Rgba::opaque(0xFF, 0xFF, 0x80),
                Rgba::opaque(0xFF, 0xA0, 0x80),
                Rgba::opaque(0xFF, 0x60, 0x40),
                Rgba::opaque(0xFF, 0x20, 0x00),
            ],
        }
    }

    pub fn stops(&self) -> &[Rgba] {
        &self.stops
    }

    /// `t`(0~1) 위치의 색. 범위를 벗어나면 양 끝 색으로 고정된다.
    pub fn sample(&self, t: f64) -> Rgba {
        let t = if t.is_nan() { DEGENERATE_POSITION } else { t.clamp(0.0, 1.0) };
        let segments = (self.stops.len() - 1) as f64;
        let pos = t * segments;
        let idx = (pos.floor() as usize).min(self.stops.len() - 2);
        self.stops[idx].lerp(self.stops[idx + 1], pos - idx as f64)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::cost()
    }
}

/// 비용을 [0, 1]로 정규화한다. 범위가 0이거나 유한하지 않으면 중앙값을 돌려준다.
pub fn normalize(cost: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range.is_nan() || range <= 0.0 || range.is_infinite() {
        return DEGENERATE_POSITION;
    }
    let t = (cost - min) / range;
    if t.is_nan() {
        DEGENERATE_POSITION
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// 정규화 값에 지각 보정 곡선을 적용한다.
pub fn perceptual(t: f64) -> f64 {
    t.powf(COST_CURVE_EXPONENT)
}

/// 한 행의 배경색.
pub fn cost_color(gradient: &Gradient, cost: f64, min: f64, max: f64) -> Rgba {
    gradient
        .sample(perceptual(normalize(cost, min, max)))
        .with_alpha(ROW_ALPHA)
}

/// 표의 각 행에 대응하는 배경색 배열(행 순서와 동일).
pub fn row_colors(table: &CostTable) -> Vec<Rgba> {
    row_colors_with(&Gradient::cost(), table)
}

pub fn row_colors_with(gradient: &Gradient, table: &CostTable) -> Vec<Rgba> {
    table
        .rows
        .iter()
        .map(|row| {
            cost_color(
                gradient,
                row.yearly_cost,
                table.min_yearly_cost,
                table.max_yearly_cost,
            )
        })
        .collect()
}
