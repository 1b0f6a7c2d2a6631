use js_sys::{Object, Reflect, Uint8Array};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn get_kv(obj: &JsValue, k: &str) -> Option<JsValue> {
    Reflect::get(obj, &JsValue::from_str(k))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Serialize as plain JS objects (not `Map`), `null` on failure.
pub fn to_js<T: Serialize + ?Sized>(v: &T) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

/// Copy any array-like of bytes (`Uint8Array`, `Uint8ClampedArray`, plain array).
pub fn bytes(v: &JsValue) -> Vec<u8> { Uint8Array::new(v).to_vec() }
