use crate::error::{ArgsError, RasterError};
use crate::limits;
use crate::model::InitialRegion;
use crate::raster::RasterImage;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BOX_COLOR: &str = "red";

fn default_box_color() -> String {
    DEFAULT_BOX_COLOR.to_string()
}

/// Arguments the host delivers at mount and on every argument change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "L: Deserialize<'de> + Default"))]
pub struct MountArgs<L> {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Flat RGBA bytes matching the canvas; empty means no background.
    #[serde(default)]
    pub image_data: Vec<u8>,
    #[serde(default = "Vec::new")]
    pub rects: Vec<InitialRegion<L>>,
    #[serde(default = "default_box_color")]
    pub box_color: String,
}

impl<L> MountArgs<L> {
    pub fn new(canvas_width: u32, canvas_height: u32, rects: Vec<InitialRegion<L>>) -> Self {
        MountArgs {
            canvas_width,
            canvas_height,
            image_data: Vec::new(),
            rects,
            box_color: default_box_color(),
        }
    }

    pub fn with_image(mut self, rgba: Vec<u8>) -> Self {
        self.image_data = rgba;
        self
    }

    pub fn with_box_color(mut self, color: impl Into<String>) -> Self {
        self.box_color = color.into();
        self
    }

    /// Whether switching from `self` to `other` needs a fresh scene.
    pub fn scene_changed(&self, other: &MountArgs<L>) -> bool {
        self.canvas_width != other.canvas_width
            || self.canvas_height != other.canvas_height
            || self.image_data != other.image_data
    }

    /// Decode the background, `None` when no pixels were sent.
    pub fn raster(&self) -> Result<Option<RasterImage>, RasterError> {
        if self.image_data.is_empty() {
            return Ok(None);
        }
        RasterImage::from_rgba(self.canvas_width, self.canvas_height, self.image_data.clone()).map(Some)
    }

    /// Check sizes and numbers against [`crate::limits`].
    pub fn validate(&self) -> Result<(), ArgsError> {
        for (param, d) in [("canvasWidth", self.canvas_width), ("canvasHeight", self.canvas_height)] {
            if !limits::in_canvas_bounds(d) {
                return Err(ArgsError::OutOfRange {
                    param,
                    min: 0.0,
                    max: limits::MAX_CANVAS_DIM as f64,
                    got: d as f64,
                });
            }
        }
        if self.rects.len() > limits::MAX_REGIONS {
            return Err(ArgsError::TooManyRegions {
                got: self.rects.len(),
                max: limits::MAX_REGIONS,
            });
        }
        for r in &self.rects {
            check_coord("left", r.left)?;
            check_coord("top", r.top)?;
            check_size("width", r.width)?;
            check_size("height", r.height)?;
        }
        self.raster()?;
        Ok(())
    }
}

impl<L: DeserializeOwned + Default> MountArgs<L> {
    /// Parse and validate untrusted JSON.
    pub fn from_json_value(v: serde_json::Value) -> Result<Self, ArgsError> {
        let args: MountArgs<L> = serde_json::from_value(v)?;
        args.validate()?;
        Ok(args)
    }
}

fn check_coord(param: &'static str, v: f32) -> Result<(), ArgsError> {
    if !v.is_finite() {
        return Err(ArgsError::NonFinite { param });
    }
    if !limits::in_coord_bounds(v) {
        return Err(ArgsError::OutOfRange {
            param,
            min: limits::COORD_MIN as f64,
            max: limits::COORD_MAX as f64,
            got: v as f64,
        });
    }
    Ok(())
}

fn check_size(param: &'static str, v: f32) -> Result<(), ArgsError> {
    if !v.is_finite() {
        return Err(ArgsError::NonFinite { param });
    }
    if !limits::in_size_bounds(v) {
        return Err(ArgsError::OutOfRange {
            param,
            min: 0.0,
            max: limits::SIZE_MAX as f64,
            got: v as f64,
        });
    }
    Ok(())
}
