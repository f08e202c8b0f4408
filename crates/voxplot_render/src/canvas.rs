//! RGBA8 framebuffer with straight-alpha "over" blending.

use bytemuck::{Pod, Zeroable};
use voxplot_core::Rgba;

use crate::error::{RenderError, RenderResult};

/// One 8-bit RGBA pixel, laid out for direct PNG export.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Pixel {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Creates a pixel.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for Pixel {
    fn from(c: Rgba) -> Self {
        let [r, g, b, a] = c.to_rgba8();
        Self::new(r, g, b, a)
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Shrinks every side by `margin` pixels.
    #[must_use]
    pub fn inset(&self, margin: f32) -> Self {
        Self::new(
            self.x + margin,
            self.y + margin,
            (self.w - 2.0 * margin).max(0.0),
            (self.h - 2.0 * margin).max(0.0),
        )
    }
}

/// A width × height pixel grid, row-major from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidFigure`] for a zero-sized or
    /// overflowing canvas.
    pub fn new(width: u32, height: u32, background: Pixel) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidFigure(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| RenderError::InvalidFigure(format!("{width}x{height} overflows")))?;

        Ok(Self {
            width,
            height,
            pixels: vec![background; len],
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Raw RGBA8 bytes for encoding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)` if inside the canvas.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        (x < self.width && y < self.height).then(|| self.pixels[self.index(x, y)])
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Blends `color` over the pixel at `(x, y)`; out-of-bounds is ignored.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let sa = color.a.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }

        let idx = self.index(x as u32, y as u32);
        let dst = self.pixels[idx];
        let da = f32::from(dst.a) / 255.0;
        let out_a = sa + da * (1.0 - sa);

        let mix = |s: f32, d: u8| {
            let d = f32::from(d) / 255.0;
            let c = (s.clamp(0.0, 1.0) * sa + d * da * (1.0 - sa)) / out_a;
            (c * 255.0 + 0.5).clamp(0.0, 255.0) as u8
        };

        self.pixels[idx] = Pixel::new(
            mix(color.r, dst.r),
            mix(color.g, dst.g),
            mix(color.b, dst.b),
            (out_a * 255.0 + 0.5).clamp(0.0, 255.0) as u8,
        );
    }

    /// Blends a filled axis-aligned square of side `size` centred on `(cx, cy)`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn fill_square(&mut self, cx: f32, cy: f32, size: f32, color: Rgba) {
        let half = size.max(1.0) * 0.5;
        let x0 = (cx - half).round() as i64;
        let y0 = (cy - half).round() as i64;
        let x1 = (cx + half).round() as i64;
        let y1 = (cy + half).round() as i64;
        for y in y0..y1.max(y0 + 1) {
            for x in x0..x1.max(x0 + 1) {
                self.blend(x, y, color);
            }
        }
    }

    /// Draws a line of `width` pixels by stamping squares along it.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        // Opaque stamps overlap harmlessly; translucent lines would darken
        let color = color.with_alpha(1.0);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.fill_square(from.0 + dx * t, from.1 + dy * t, width, color);
        }
    }
}
