use super::{RectStyle, RenderSurface};
use crate::error::SurfaceError;
use crate::gesture::PointerKind;
use crate::model::Bounds;
use crate::raster::RasterImage;

#[derive(Clone, Debug)]
pub struct MemoryRect {
    pub bounds: Bounds,
    pub style: RectStyle,
}

/// Headless surface keeping rectangles in a slot vector. It also exposes the
/// edits a user would make with a pointer (`select`, `translate`, `resize`).
#[derive(Clone, Debug)]
pub struct MemorySurface {
    rects: Vec<Option<MemoryRect>>, // handle is index
    order: Vec<u32>,                // z-order of live handles
    selected: Option<u32>,
    listeners: Vec<PointerKind>,
    listener_updates: u32,
    background: Option<RasterImage>,
    has_context: bool,
    renders: u64,
}

impl Default for MemorySurface {
    fn default() -> Self {
        MemorySurface {
            rects: Vec::new(),
            order: Vec::new(),
            selected: None,
            listeners: Vec::new(),
            listener_updates: 0,
            background: None,
            has_context: true,
            renders: 0,
        }
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose 2D context is unavailable.
    pub fn without_context() -> Self {
        MemorySurface {
            has_context: false,
            ..Self::default()
        }
    }

    pub fn rect(&self, handle: u32) -> Option<&MemoryRect> {
        self.rects.get(handle as usize).and_then(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Select an interactive object. Returns false for unknown or
    /// non-interactive handles.
    pub fn select(&mut self, handle: u32) -> bool {
        match self.rect(handle) {
            Some(r) if r.style.interactive => {
                self.selected = Some(handle);
                true
            }
            _ => false,
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn translate(&mut self, handle: u32, dx: f32, dy: f32) -> bool {
        match self.rects.get_mut(handle as usize) {
            Some(Some(r)) => {
                r.bounds.left += dx;
                r.bounds.top += dy;
                true
            }
            _ => false,
        }
    }

    pub fn resize(&mut self, handle: u32, width: f32, height: f32) -> bool {
        match self.rects.get_mut(handle as usize) {
            Some(Some(r)) => {
                r.bounds.width = width.max(0.0);
                r.bounds.height = height.max(0.0);
                true
            }
            _ => false,
        }
    }

    /// Uniform scale about the top-left corner.
    pub fn scale(&mut self, handle: u32, factor: f32) -> bool {
        match self.rect(handle).map(|r| r.bounds) {
            Some(b) => self.resize(handle, b.width * factor, b.height * factor),
            None => false,
        }
    }

    pub fn listeners(&self) -> &[PointerKind] {
        &self.listeners
    }

    /// How many times the listener set was replaced.
    pub fn listener_updates(&self) -> u32 {
        self.listener_updates
    }

    pub fn background(&self) -> Option<&RasterImage> {
        self.background.as_ref()
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl RenderSurface for MemorySurface {
    type Handle = u32;

    fn set_background(&mut self, image: &RasterImage) -> Result<(), SurfaceError> {
        if !self.has_context {
            return Err(SurfaceError::NoContext);
        }
        self.background = Some(image.clone());
        Ok(())
    }

    fn add_rect(&mut self, bounds: Bounds, style: &RectStyle) -> u32 {
        let handle = self.rects.len() as u32;
        self.rects.push(Some(MemoryRect {
            bounds,
            style: style.clone(),
        }));
        self.order.push(handle);
        handle
    }

    fn set_rect_bounds(&mut self, handle: u32, bounds: Bounds) {
        if let Some(Some(r)) = self.rects.get_mut(handle as usize) {
            r.bounds = bounds;
        }
    }

    fn remove(&mut self, handle: u32) {
        if let Some(slot) = self.rects.get_mut(handle as usize) {
            if slot.take().is_some() {
                self.order.retain(|&h| h != handle);
                if self.selected == Some(handle) {
                    self.selected = None;
                }
            }
        }
    }

    fn objects(&self) -> Vec<u32> {
        self.order.clone()
    }

    fn bounding_rect(&self, handle: u32) -> Option<Bounds> {
        self.rect(handle).map(|r| r.bounds)
    }

    fn selected(&self) -> Option<u32> {
        self.selected
    }

    fn set_pointer_listeners(&mut self, kinds: &[PointerKind]) {
        self.listeners = kinds.to_vec();
        self.listener_updates += 1;
    }

    fn request_render(&mut self) {
        self.renders += 1;
    }
}
