// Ingestion limits for host-supplied arguments

// Canvas size caps (pixels per side)
pub const MAX_CANVAS_DIM: u32 = 16_384;

// Region count cap for one mount
pub const MAX_REGIONS: usize = 10_000;

// Numeric bounds
pub const COORD_MIN: f32 = -1_000_000.0;
pub const COORD_MAX: f32 = 1_000_000.0;
pub const SIZE_MAX: f32 = 1_000_000.0;

// Default display box used when fitting a source image onto the canvas
pub const DEFAULT_MAX_DISPLAY: u32 = 700;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_size_bounds(w: f32) -> bool { w.is_finite() && w >= 0.0 && w <= SIZE_MAX }

#[inline]
pub fn in_canvas_bounds(d: u32) -> bool { d <= MAX_CANVAS_DIM }
