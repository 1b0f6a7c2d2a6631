#![allow(dead_code)]

use boxlabel_wasm::JsSurface;
use js_sys::{Function, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};

// In-page stand-in for the host canvas. Handles count up from 1.
const MOCK_SURFACE: &str = r#"
const rects = new Map();
const order = [];
let next = 1;
return {
  sel: null, listeners: [], renders: 0, bg: null, hasContext: true,
  setBackground(w, h, rgba) { if (!this.hasContext) return false; this.bg = [w, h, rgba.length]; return true; },
  addRect(b, s) { const h = next++; rects.set(h, { b: Object.assign({}, b), s }); order.push(h); return h; },
  setRectBounds(h, b) { const r = rects.get(h); if (r) r.b = Object.assign({}, b); },
  remove(h) { rects.delete(h); const i = order.indexOf(h); if (i >= 0) order.splice(i, 1); if (this.sel === h) this.sel = null; },
  objects() { return Uint32Array.from(order); },
  boundingRect(h) { const r = rects.get(h); return r ? r.b : null; },
  selected() { return this.sel; },
  setPointerListeners(k) { this.listeners = k; },
  requestRender() { this.renders++; },
  getPointer(e) { return { x: e.clientX, y: e.clientY }; },
  select(h) { this.sel = h; },
  style(h) { const r = rects.get(h); return r ? r.s : null; },
  count() { return order.length; },
};
"#;

pub struct Mock {
    pub obj: JsValue,
}

impl Mock {
    pub fn new() -> Mock {
        let f = Function::new_no_args(MOCK_SURFACE);
        Mock { obj: f.call0(&JsValue::NULL).unwrap() }
    }

    pub fn surface(&self) -> JsSurface {
        self.obj.clone().unchecked_into()
    }

    pub fn get(&self, k: &str) -> JsValue {
        Reflect::get(&self.obj, &JsValue::from_str(k)).unwrap()
    }

    pub fn set(&self, k: &str, v: &JsValue) {
        Reflect::set(&self.obj, &JsValue::from_str(k), v).unwrap();
    }

    pub fn call(&self, name: &str, args: &[JsValue]) -> JsValue {
        let f: Function = self.get(name).unchecked_into();
        let arr = js_sys::Array::new();
        for a in args {
            arr.push(a);
        }
        f.apply(&self.obj, &arr).unwrap()
    }

    pub fn select(&self, handle: u32) {
        self.call("select", &[JsValue::from_f64(handle as f64)]);
    }

    pub fn count(&self) -> u32 {
        self.call("count", &[]).as_f64().unwrap() as u32
    }

    pub fn listeners(&self) -> Vec<String> {
        serde_wasm_bindgen::from_value(self.get("listeners")).unwrap()
    }
}

pub fn js(src: &str) -> JsValue {
    JSON::parse(src).unwrap()
}

pub fn json(v: JsValue) -> serde_json::Value {
    serde_wasm_bindgen::from_value(v).unwrap()
}

pub fn two_regions() -> JsValue {
    js(r#"{"canvasWidth": 200, "canvasHeight": 100, "rects": [
        {"top": 10, "left": 10, "width": 50, "height": 50, "label": "A"},
        {"top": 20, "left": 80, "width": 15, "height": 25, "label": "B"}]}"#)
}

pub fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}

pub fn value(v: &JsValue) -> JsValue {
    Reflect::get(v, &JsValue::from_str("value")).unwrap()
}

pub fn is_err(v: &JsValue, code: &str) -> bool {
    if is_ok(v) {
        return false;
    }
    if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
        if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
            return c.as_string().map_or(false, |s| s == code);
        }
    }
    false
}
