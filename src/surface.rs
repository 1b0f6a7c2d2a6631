use crate::interop::{new_obj, set_kv, to_js};
use boxlabel::{Bounds, Point, PointerButton, PointerInput, PointerKind, RasterImage, RectStyle, RenderSurface, SurfaceError};
use js_sys::{Array, Uint32Array};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Host-side canvas. Objects are identified by `u32` handles the host
    /// hands out from `addRect`.
    pub type JsSurface;

    /// Returns false when no 2D context is available.
    #[wasm_bindgen(method, catch, js_name = setBackground)]
    fn js_set_background(this: &JsSurface, width: u32, height: u32, rgba: &[u8]) -> Result<bool, JsValue>;
    #[wasm_bindgen(method, js_name = addRect)]
    fn js_add_rect(this: &JsSurface, bounds: JsValue, style: JsValue) -> u32;
    #[wasm_bindgen(method, js_name = setRectBounds)]
    fn js_set_rect_bounds(this: &JsSurface, handle: u32, bounds: JsValue);
    #[wasm_bindgen(method, js_name = remove)]
    fn js_remove(this: &JsSurface, handle: u32);
    #[wasm_bindgen(method, js_name = objects)]
    fn js_objects(this: &JsSurface) -> JsValue;
    #[wasm_bindgen(method, js_name = boundingRect)]
    fn js_bounding_rect(this: &JsSurface, handle: u32) -> JsValue;
    #[wasm_bindgen(method, js_name = selected)]
    fn js_selected(this: &JsSurface) -> JsValue;
    #[wasm_bindgen(method, js_name = setPointerListeners)]
    fn js_set_pointer_listeners(this: &JsSurface, kinds: Array);
    #[wasm_bindgen(method, js_name = requestRender)]
    fn js_request_render(this: &JsSurface);
    /// Map a DOM pointer event into canvas coordinates.
    #[wasm_bindgen(method, js_name = getPointer)]
    fn js_get_pointer(this: &JsSurface, event: &JsValue) -> JsValue;
}

fn kind_name(k: PointerKind) -> &'static str {
    match k {
        PointerKind::Down => "down",
        PointerKind::Move => "move",
        PointerKind::Up => "up",
    }
}

fn style_obj(style: &RectStyle) -> JsValue {
    let o = new_obj();
    set_kv(&o, "stroke", &JsValue::from_str(&style.stroke));
    set_kv(&o, "strokeWidth", &JsValue::from_f64(style.stroke_width as f64));
    let fill = style.fill.as_deref().map(JsValue::from_str).unwrap_or(JsValue::NULL);
    set_kv(&o, "fill", &fill);
    set_kv(&o, "interactive", &JsValue::from_bool(style.interactive));
    set_kv(&o, "uniformScale", &JsValue::from_bool(style.uniform_scale));
    o.into()
}

impl JsSurface {
    /// Canvas-space pointer input for a DOM event; `None` if the host could
    /// not map it. Button 2 is the secondary button.
    pub fn pointer_input(&self, event: &JsValue) -> Option<PointerInput> {
        let p: Point = serde_wasm_bindgen::from_value(self.js_get_pointer(event)).ok()?;
        if !p.x.is_finite() || !p.y.is_finite() {
            return None;
        }
        let button = match crate::interop::get_kv(event, "button").and_then(|b| b.as_f64()) {
            Some(b) if b == 2.0 => PointerButton::Secondary,
            _ => PointerButton::Primary,
        };
        Some(PointerInput { point: p, button })
    }
}

impl RenderSurface for JsSurface {
    type Handle = u32;

    fn set_background(&mut self, image: &RasterImage) -> Result<(), SurfaceError> {
        match self.js_set_background(image.width(), image.height(), image.rgba()) {
            Ok(true) => Ok(()),
            Ok(false) => Err(SurfaceError::NoContext),
            Err(e) => Err(SurfaceError::Other(
                e.as_string().unwrap_or_else(|| "setBackground threw".to_string()),
            )),
        }
    }

    fn add_rect(&mut self, bounds: Bounds, style: &RectStyle) -> u32 {
        self.js_add_rect(to_js(&bounds), style_obj(style))
    }

    fn set_rect_bounds(&mut self, handle: u32, bounds: Bounds) {
        self.js_set_rect_bounds(handle, to_js(&bounds));
    }

    fn remove(&mut self, handle: u32) {
        self.js_remove(handle);
    }

    fn objects(&self) -> Vec<u32> {
        let v = self.js_objects();
        if v.is_undefined() || v.is_null() {
            return Vec::new();
        }
        Uint32Array::new(&v).to_vec()
    }

    fn bounding_rect(&self, handle: u32) -> Option<Bounds> {
        let v = self.js_bounding_rect(handle);
        if v.is_undefined() || v.is_null() {
            return None;
        }
        serde_wasm_bindgen::from_value(v).ok()
    }

    fn selected(&self) -> Option<u32> {
        let v = self.js_selected().as_f64()?;
        if v >= 0.0 && v <= u32::MAX as f64 && v.fract() == 0.0 {
            Some(v as u32)
        } else {
            None
        }
    }

    fn set_pointer_listeners(&mut self, kinds: &[PointerKind]) {
        let arr = Array::new();
        for k in kinds {
            arr.push(&JsValue::from_str(kind_name(*k)));
        }
        self.js_set_pointer_listeners(arr);
    }

    fn request_render(&mut self) {
        self.js_request_render();
    }
}
