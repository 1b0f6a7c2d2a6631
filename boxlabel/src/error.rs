//! Error types for argument ingestion, rasters, the surface and commands.
//!
//! Every variant has a stable `code()` string which the host binding places in
//! its error objects.

use thiserror::Error;

/// Problems with host-supplied mount arguments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgsError {
    #[error("malformed arguments: {0}")]
    Parse(String),

    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },

    #[error("parameter '{param}' out of range: {got} not in [{min}, {max}]")]
    OutOfRange {
        param: &'static str,
        min: f64,
        max: f64,
        got: f64,
    },

    #[error("too many regions: {got} exceeds {max}")]
    TooManyRegions { got: usize, max: usize },

    #[error(transparent)]
    Raster(#[from] RasterError),
}

impl ArgsError {
    pub fn code(&self) -> &'static str {
        match self {
            ArgsError::Parse(_) => "json_parse",
            ArgsError::NonFinite { .. } => "non_finite",
            ArgsError::OutOfRange { .. } => "out_of_range",
            ArgsError::TooManyRegions { .. } => "too_many_regions",
            ArgsError::Raster(e) => e.code(),
        }
    }
}

impl From<serde_json::Error> for ArgsError {
    fn from(e: serde_json::Error) -> Self {
        ArgsError::Parse(e.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("pixel buffer holds {got} bytes, expected {expected} for {width}x{height} RGBA")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        got: usize,
    },

    #[error("image dimension {got} exceeds {max}")]
    TooLarge { got: u32, max: u32 },
}

impl RasterError {
    pub fn code(&self) -> &'static str {
        match self {
            RasterError::SizeMismatch { .. } => "size_mismatch",
            RasterError::TooLarge { .. } => "too_large",
        }
    }
}

/// Failures reported by a rendering surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("no 2D drawing context available")]
    NoContext,

    #[error("surface error: {0}")]
    Other(String),
}

impl SurfaceError {
    pub fn code(&self) -> &'static str {
        match self {
            SurfaceError::NoContext => "no_context",
            SurfaceError::Other(_) => "surface",
        }
    }
}

/// Commands refused by product policy. State is unchanged when returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("at least one region must remain")]
    LastRegion,
}

impl CommandError {
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::LastRegion => "last_region",
        }
    }
}
