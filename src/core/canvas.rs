use crate::math::Rgba;
use crate::traits::DrawSurface;

/// Software drawing surface - RGBA8 backing store with a scale transform
#[derive(Debug, Clone)]
pub struct Canvas {
    /// RGBA pixel buffer, straight alpha
    pixels: Vec<u8>,
    /// Backing store dimensions in device pixels
    width: u32,
    height: u32,
    /// On-screen size in CSS pixels
    css_width: f64,
    css_height: f64,
    /// Current transform (scale only)
    sx: f64,
    sy: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Canvas {
    /// Create a transparent canvas with an identity transform
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
            css_width: width as f64,
            css_height: height as f64,
            sx: 1.0,
            sy: 1.0,
        }
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get backing store dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn css_size(&self) -> (f64, f64) {
        (self.css_width, self.css_height)
    }

    pub fn transform(&self) -> (f64, f64) {
        (self.sx, self.sy)
    }

    /// RGBA at a device pixel, `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(rgba)
    }

    /// True when every pixel is fully transparent
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|p| p[3] == 0)
    }

    /// Map a rect in transformed coordinates to clipped device pixel spans.
    ///
    /// Edges are rounded independently so rects sharing an edge tile
    /// without gaps or overlap.
    fn device_span(&self, x: f64, y: f64, width: f64, height: f64) -> Option<(usize, usize, usize, usize)> {
        let edge = |v: f64, scale: f64, max: u32| -> usize {
            let v = (v * scale).round();
            if v.is_nan() || v <= 0.0 {
                0
            } else {
                (v as u64).min(max as u64) as usize
            }
        };

        let (left, right) = (x.min(x + width), x.max(x + width));
        let (top, bottom) = (y.min(y + height), y.max(y + height));

        let x0 = edge(left, self.sx, self.width);
        let x1 = edge(right, self.sx, self.width);
        let y0 = edge(top, self.sy, self.height);
        let y1 = edge(bottom, self.sy, self.height);

        (x0 < x1 && y0 < y1).then_some((x0, x1, y0, y1))
    }

    fn blend(dst: &mut [u8], color: Rgba) {
        let src_a = color.a.clamp(0.0, 1.0) as f64;
        if src_a >= 1.0 {
            dst.copy_from_slice(&[color.r, color.g, color.b, 255]);
            return;
        }

        let dst_a = dst[3] as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }

        let mix = |src: u8, dst: u8| -> u8 {
            ((src as f64 * src_a + dst as f64 * dst_a * (1.0 - src_a)) / out_a).round() as u8
        };

        dst[0] = mix(color.r, dst[0]);
        dst[1] = mix(color.g, dst[1]);
        dst[2] = mix(color.b, dst[2]);
        dst[3] = (out_a * 255.0).round() as u8;
    }
}

impl DrawSurface for Canvas {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize * 4, 0);
        self.sx = 1.0;
        self.sy = 1.0;
    }

    fn set_css_size(&mut self, width: f64, height: f64) {
        self.css_width = width;
        self.css_height = height;
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.sx *= sx;
        self.sy *= sy;
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some((x0, x1, y0, y1)) = self.device_span(x, y, width, height) else {
            return;
        };

        let stride = self.width as usize * 4;
        for row in y0..y1 {
            self.pixels[row * stride + x0 * 4..row * stride + x1 * 4].fill(0);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        if color.a <= 0.0 {
            return;
        }
        let Some((x0, x1, y0, y1)) = self.device_span(x, y, width, height) else {
            return;
        };

        let stride = self.width as usize * 4;
        for row in y0..y1 {
            let line = &mut self.pixels[row * stride + x0 * 4..row * stride + x1 * 4];
            for px in line.chunks_exact_mut(4) {
                Self::blend(px, color);
            }
        }
    }
}
