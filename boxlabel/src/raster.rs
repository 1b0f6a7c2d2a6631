use crate::error::RasterError;
use crate::limits;
use crate::model::Bounds;

/// Flat RGBA8 pixel buffer, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl RasterImage {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, RasterError> {
        for d in [width, height] {
            if !limits::in_canvas_bounds(d) {
                return Err(RasterError::TooLarge {
                    got: d,
                    max: limits::MAX_CANVAS_DIM,
                });
            }
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                expected,
                got: rgba.len(),
            });
        }
        Ok(RasterImage {
            width,
            height,
            rgba,
        })
    }

    /// Blank transparent image.
    pub fn blank(width: u32, height: u32) -> Self {
        RasterImage {
            width,
            height,
            rgba: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy the pixels under `b`, clamped to the image. Fractional edges are
    /// truncated toward the origin.
    pub fn crop(&self, b: Bounds) -> RasterImage {
        let x0 = clamp_px(b.left, self.width);
        let y0 = clamp_px(b.top, self.height);
        let x1 = clamp_px(b.left + b.width, self.width);
        let y1 = clamp_px(b.top + b.height, self.height);
        let (w, h) = (x1.saturating_sub(x0), y1.saturating_sub(y0));
        let mut out = Vec::with_capacity(w as usize * h as usize * 4);
        let stride = self.width as usize * 4;
        for row in y0..y0 + h {
            let start = row as usize * stride + x0 as usize * 4;
            out.extend_from_slice(&self.rgba[start..start + w as usize * 4]);
        }
        RasterImage {
            width: w,
            height: h,
            rgba: out,
        }
    }
}

fn clamp_px(v: f32, max: u32) -> u32 {
    if !v.is_finite() || v <= 0.0 {
        0
    } else {
        (v as u32).min(max)
    }
}

/// Ratio between a source image and its downscaled display size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRatio {
    pub x: f32,
    pub y: f32,
    pub display_width: u32,
    pub display_height: u32,
}

impl ScaleRatio {
    pub fn identity(width: u32, height: u32) -> Self {
        ScaleRatio {
            x: 1.0,
            y: 1.0,
            display_width: width,
            display_height: height,
        }
    }

    /// Shrink `width x height` until it fits `max_w x max_h`, height first,
    /// keeping aspect ratio. Never enlarges.
    pub fn fit_within(width: u32, height: u32, max_w: u32, max_h: u32) -> Self {
        if width == 0 || height == 0 {
            return ScaleRatio::identity(width, height);
        }
        let (mut w, mut h) = (width as f64, height as f64);
        if h > max_h as f64 {
            let r = max_h as f64 / h;
            w = (w * r).floor();
            h = (h * r).floor();
        }
        if w > max_w as f64 {
            let r = max_w as f64 / w;
            w = (w * r).floor();
            h = (h * r).floor();
        }
        let (dw, dh) = (w.max(1.0) as u32, h.max(1.0) as u32);
        ScaleRatio {
            x: (width as f64 / dw as f64) as f32,
            y: (height as f64 / dh as f64) as f32,
            display_width: dw,
            display_height: dh,
        }
    }

    pub fn to_display(&self, b: Bounds) -> Bounds {
        Bounds::new(b.left / self.x, b.top / self.y, b.width / self.x, b.height / self.y)
    }

    /// Map display bounds back onto whole source pixels.
    pub fn to_source(&self, b: Bounds) -> Bounds {
        Bounds::new(
            (b.left * self.x).trunc(),
            (b.top * self.y).trunc(),
            (b.width * self.x).trunc(),
            (b.height * self.y).trunc(),
        )
    }
}
