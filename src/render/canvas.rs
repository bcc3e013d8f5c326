use image::RgbaImage;

use crate::error::RenderError;
use crate::gradient::Rgba;
use crate::render::font::{self, ADVANCE, GLYPH_W};

/// 한 변의 최대 픽셀 수. 이보다 크면 캔버스를 만들지 않는다.
pub const MAX_SIDE: u32 = 32_768;

/// 불투명 배경 위에 색을 합성해 그리는 RGBA 래스터.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// `background`로 채워진 캔버스를 만든다.
    pub fn new(width: u32, height: u32, background: Rgba) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(RenderError::Canvas { width, height });
        }
        let px = image::Rgba(background.with_alpha(1.0).to_rgba8());
        Ok(Self {
            img: RgbaImage::from_pixel(width, height, px),
        })
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// 알파 합성(source-over)으로 한 픽셀을 칠한다. 범위 밖은 무시한다.
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.img.width() || y >= self.img.height() {
            return;
        }
        let a = color.a.clamp(0.0, 1.0);
        let dst = self.img.get_pixel_mut(x, y);
        let mix = |src: f64, d: u8| {
            let d = d as f64 / 255.0;
            ((src * a + d * (1.0 - a)).clamp(0.0, 1.0) * 255.0).round() as u8
        };
        dst.0 = [
            mix(color.r, dst.0[0]),
            mix(color.g, dst.0[1]),
            mix(color.b, dst.0[2]),
            255,
        ];
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        for dy in 0..h {
            for dx in 0..w {
                self.blend_pixel(x + dx, y + dy, color);
            }
        }
    }

    pub fn draw_hline(&mut self, x: u32, y: u32, w: u32, thickness: u32, color: Rgba) {
        self.fill_rect(x, y, w, thickness, color);
    }

    pub fn draw_vline(&mut self, x: u32, y: u32, h: u32, thickness: u32, color: Rgba) {
        self.fill_rect(x, y, thickness, h, color);
    }

    /// 글리프 하나를 `scale` 배율로 그린다.
    fn draw_char(&mut self, x: u32, y: u32, ch: char, scale: u32, color: Rgba) {
        let glyph = font::glyph_or_fallback(ch);
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (0x10 >> col) != 0 {
                    self.fill_rect(
                        x + col * scale,
                        y + row as u32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }

    /// 문자열을 그린다. `bold`이면 가로로 한 번 더 겹쳐 그린다.
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, scale: u32, color: Rgba, bold: bool) {
        let offsets = [0, font::bold_offset(scale)];
        let passes = if bold { 2 } else { 1 };
        for &off in &offsets[..passes] {
            for (i, ch) in text.chars().enumerate() {
                self.draw_char(x + off + i as u32 * ADVANCE * scale, y, ch, scale, color);
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }
}
