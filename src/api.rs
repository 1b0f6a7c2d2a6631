use crate::error;
use crate::interop::{bytes, get_kv, new_obj, set_kv, to_js};
use crate::{Annotator, HostLabel, JsSurface};
use boxlabel::{ArgsError, ControllerConfig, MountArgs, Outcome, PointerInput, Theme};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route `log` records to the browser console. Accepts `error`, `warn`,
/// `info`, `debug` or `trace`; returns false on an unknown level or when a
/// logger is already installed.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    let level = match level.parse::<log::Level>() {
        Ok(l) => l,
        Err(_) => return false,
    };
    console_log::init_with_level(level).is_ok()
}

/// Host args arrive with `imageData` as a typed array. It is copied out
/// directly and the rest goes through serde.
fn parse_args(v: &JsValue) -> Result<MountArgs<HostLabel>, ArgsError> {
    let obj = v
        .dyn_ref::<Object>()
        .ok_or_else(|| ArgsError::Parse("args must be an object".to_string()))?;
    let image = get_kv(v, "imageData").map(|d| bytes(&d));
    let rest = Object::assign(&Object::new(), obj);
    let _ = Reflect::delete_property(&rest, &JsValue::from_str("imageData"));
    let json: serde_json::Value =
        serde_wasm_bindgen::from_value(rest.into()).map_err(|e| ArgsError::Parse(e.to_string()))?;
    let mut args = MountArgs::from_json_value(json)?;
    if let Some(rgba) = image {
        args.image_data = rgba;
        args.raster()?;
    }
    Ok(args)
}

fn parse_config(v: &JsValue) -> Result<ControllerConfig, ArgsError> {
    if v.is_undefined() || v.is_null() {
        return Ok(ControllerConfig::default());
    }
    let json: serde_json::Value =
        serde_wasm_bindgen::from_value(v.clone()).map_err(|e| ArgsError::Parse(e.to_string()))?;
    Ok(ControllerConfig::from_json_value(json)?)
}

fn parse_label(v: JsValue) -> Option<HostLabel> {
    if v.is_undefined() {
        return Some(HostLabel::default());
    }
    serde_wasm_bindgen::from_value::<serde_json::Value>(v).ok().map(HostLabel)
}

fn outcome(o: Outcome<HostLabel>) -> JsValue {
    match o.into_payload() {
        Some(p) => to_js(&p),
        None => JsValue::NULL,
    }
}

fn at(x: f32, y: f32, secondary: bool) -> Option<PointerInput> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(if secondary { PointerInput::secondary(x, y) } else { PointerInput::primary(x, y) })
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map_or(false, |m| m.matches())
}

#[wasm_bindgen]
impl Annotator {
    /// Mount on `surface`. Throws a typed error object on invalid args or
    /// config.
    #[wasm_bindgen(constructor)]
    pub fn new(surface: JsSurface, args: JsValue, config: JsValue) -> Result<Annotator, JsValue> {
        let args = parse_args(&args).map_err(|e| error::args(&e))?;
        let config = parse_config(&config).map_err(|e| error::args(&e))?;
        let mut a = Annotator::rs_mount(surface, args, config);
        a.inner.theme_changed(Theme::from_dark(prefers_dark()));
        Ok(a)
    }

    // Host args
    pub fn update_args(&mut self, args: JsValue) -> JsValue {
        match parse_args(&args) {
            Ok(a) => outcome(self.inner.update_args(a)),
            Err(e) => {
                log::warn!("ignoring invalid args: {}", e);
                JsValue::NULL
            }
        }
    }
    pub fn update_args_res(&mut self, args: JsValue) -> JsValue {
        match parse_args(&args) {
            Ok(a) => error::ok(outcome(self.inner.update_args(a))),
            Err(e) => error::args(&e),
        }
    }

    // Draw gesture
    pub fn begin_add(&mut self) -> bool {
        self.inner.begin_add()
    }
    pub fn cancel_gesture(&mut self) -> bool {
        self.inner.cancel_gesture()
    }
    pub fn is_drawing(&self) -> bool {
        self.inner.is_drawing()
    }
    pub fn pointer_down(&mut self, event: JsValue) -> JsValue {
        match self.inner.surface().pointer_input(&event) {
            Some(p) => outcome(self.inner.pointer_down(p)),
            None => JsValue::NULL,
        }
    }
    pub fn pointer_move(&mut self, event: JsValue) -> JsValue {
        match self.inner.surface().pointer_input(&event) {
            Some(p) => outcome(self.inner.pointer_move(p)),
            None => JsValue::NULL,
        }
    }
    pub fn pointer_up(&mut self, event: JsValue) -> JsValue {
        match self.inner.surface().pointer_input(&event) {
            Some(p) => outcome(self.inner.pointer_up(p)),
            None => JsValue::NULL,
        }
    }
    pub fn pointer_down_at(&mut self, x: f32, y: f32, secondary: bool) -> JsValue {
        match at(x, y, secondary) {
            Some(p) => outcome(self.inner.pointer_down(p)),
            None => JsValue::NULL,
        }
    }
    pub fn pointer_move_at(&mut self, x: f32, y: f32) -> JsValue {
        match at(x, y, false) {
            Some(p) => outcome(self.inner.pointer_move(p)),
            None => JsValue::NULL,
        }
    }
    pub fn pointer_up_at(&mut self, x: f32, y: f32) -> JsValue {
        match at(x, y, false) {
            Some(p) => outcome(self.inner.pointer_up(p)),
            None => JsValue::NULL,
        }
    }

    // Commands
    pub fn remove_selected(&mut self) -> JsValue {
        match self.inner.remove_selected() {
            Ok(o) => outcome(o),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn remove_selected_res(&mut self) -> JsValue {
        match self.inner.remove_selected() {
            Ok(o) => error::ok(outcome(o)),
            Err(e) => error::command(&e),
        }
    }
    pub fn remove_region_res(&mut self, id: u32) -> JsValue {
        if self.inner.handle_of(id).is_none() {
            return error::invalid_id("region", id);
        }
        match self.inner.remove_region(id) {
            Ok(o) => error::ok(outcome(o)),
            Err(e) => error::command(&e),
        }
    }
    pub fn reset(&mut self) -> JsValue {
        outcome(self.inner.reset())
    }
    pub fn clear(&mut self) -> JsValue {
        outcome(self.inner.clear())
    }
    /// The host finished a move or resize on `handle`.
    pub fn object_modified(&mut self, handle: u32) -> JsValue {
        outcome(self.inner.object_modified(handle))
    }
    pub fn object_modified_res(&mut self, handle: u32) -> JsValue {
        if self.inner.region_of(handle).is_none() {
            return error::invalid_id("handle", handle);
        }
        error::ok(outcome(self.inner.object_modified(handle)))
    }
    pub fn set_label(&mut self, id: u32, label: JsValue) -> JsValue {
        match parse_label(label) {
            Some(l) => outcome(self.inner.set_label(id, l)),
            None => JsValue::NULL,
        }
    }
    pub fn set_label_res(&mut self, id: u32, label: JsValue) -> JsValue {
        if self.inner.handle_of(id).is_none() {
            return error::invalid_id("region", id);
        }
        match parse_label(label) {
            Some(l) => error::ok(outcome(self.inner.set_label(id, l))),
            None => error::err("json_parse", "label is not JSON-representable", None),
        }
    }

    // Theme
    pub fn theme_changed(&mut self, dark: bool) {
        self.inner.theme_changed(Theme::from_dark(dark));
    }
    /// Re-read `prefers-color-scheme` and return the resulting theme name.
    pub fn detect_theme(&mut self) -> String {
        self.theme_changed(prefers_dark());
        self.theme()
    }
    pub fn theme(&self) -> String {
        match self.inner.theme() {
            Theme::Light => "light".to_string(),
            Theme::Dark => "dark".to_string(),
        }
    }

    // Queries
    pub fn payload(&self) -> JsValue {
        to_js(&self.inner.payload())
    }
    /// Live regions in z-order as `{id, left, top, width, height, label}`.
    pub fn regions(&self) -> JsValue {
        let out = Array::new();
        for r in self.inner.regions() {
            let o = new_obj();
            set_kv(&o, "id", &JsValue::from_f64(r.id as f64));
            set_kv(&o, "left", &JsValue::from_f64(r.bounds.left as f64));
            set_kv(&o, "top", &JsValue::from_f64(r.bounds.top as f64));
            set_kv(&o, "width", &JsValue::from_f64(r.bounds.width as f64));
            set_kv(&o, "height", &JsValue::from_f64(r.bounds.height as f64));
            set_kv(&o, "label", &to_js(&r.label));
            out.push(&o);
        }
        out.into()
    }
    pub fn region_count(&self) -> u32 {
        self.inner.store().len() as u32
    }
    pub fn selected_region(&self) -> Option<u32> {
        self.inner.selected_region()
    }
    pub fn region_of(&self, handle: u32) -> Option<u32> {
        self.inner.region_of(handle)
    }
    pub fn handle_of(&self, id: u32) -> Option<u32> {
        self.inner.handle_of(id)
    }
    pub fn has_background(&self) -> bool {
        self.inner.has_background()
    }
}
