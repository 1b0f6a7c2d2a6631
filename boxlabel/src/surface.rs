//! Capabilities the controller needs from a rendering surface.

pub mod memory;

use crate::error::SurfaceError;
use crate::gesture::PointerKind;
use crate::model::Bounds;
use crate::raster::RasterImage;
use std::hash::Hash;

pub const REGION_STROKE_WIDTH: f32 = 1.0;
pub const PREVIEW_STROKE_WIDTH: f32 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RectStyle {
    pub stroke: String,
    pub stroke_width: f32,
    /// CSS color; `None` draws an outline only.
    pub fill: Option<String>,
    /// Selectable and transformable by the user.
    pub interactive: bool,
    /// Scaling keeps aspect ratio and there is no rotation handle.
    pub uniform_scale: bool,
}

impl RectStyle {
    pub fn region(stroke: &str, stroke_width: f32) -> Self {
        RectStyle {
            stroke: stroke.to_string(),
            stroke_width,
            fill: None,
            interactive: true,
            uniform_scale: true,
        }
    }

    pub fn preview(stroke: &str, fill: &str) -> Self {
        RectStyle {
            stroke: stroke.to_string(),
            stroke_width: PREVIEW_STROKE_WIDTH,
            fill: Some(fill.to_string()),
            interactive: false,
            uniform_scale: true,
        }
    }
}

/// A canvas that draws rectangles over a background and reports what the user
/// did to them. Handles are owned by the surface; the controller only keeps
/// them in a side table.
pub trait RenderSurface {
    type Handle: Copy + Eq + Hash + std::fmt::Debug;

    /// Install `image` scaled to the canvas. `SurfaceError::NoContext` means
    /// the caller should carry on without a background.
    fn set_background(&mut self, image: &RasterImage) -> Result<(), SurfaceError>;
    fn add_rect(&mut self, bounds: Bounds, style: &RectStyle) -> Self::Handle;
    fn set_rect_bounds(&mut self, handle: Self::Handle, bounds: Bounds);
    fn remove(&mut self, handle: Self::Handle);
    /// Live objects in z-order.
    fn objects(&self) -> Vec<Self::Handle>;
    /// Axis-aligned bounding box of the object as currently transformed.
    fn bounding_rect(&self, handle: Self::Handle) -> Option<Bounds>;
    fn selected(&self) -> Option<Self::Handle>;
    /// Replace the registered pointer listeners with exactly `kinds`.
    fn set_pointer_listeners(&mut self, kinds: &[PointerKind]);
    fn request_render(&mut self);
}
