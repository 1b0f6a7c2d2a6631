mod common;

use boxlabel_wasm::Annotator;
use common::*;
use js_sys::{Reflect, Uint8Array};
use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(m: &Mock, args: JsValue) -> Annotator {
    Annotator::new(m.surface(), args, JsValue::UNDEFINED).unwrap()
}

#[wasm_bindgen_test]
fn mount_seeds_regions_in_order() {
    let m = Mock::new();
    let a = mount(&m, two_regions());
    assert_eq!(a.region_count(), 2);
    assert_eq!(m.count(), 2);
    let p = json(a.payload());
    assert_eq!(p["rects"][0]["label"], json!("A"));
    assert_eq!(p["rects"][1]["left"].as_f64(), Some(80.0));
    assert!(!a.is_drawing());
    assert!(!a.has_background());
}

#[wasm_bindgen_test]
fn background_installed_from_pixels() {
    let m = Mock::new();
    let args = js(r#"{"canvasWidth": 2, "canvasHeight": 1}"#);
    let px = Uint8Array::from(&[255u8, 0, 0, 255, 0, 255, 0, 255][..]);
    Reflect::set(&args, &JsValue::from_str("imageData"), &px).unwrap();
    let a = mount(&m, args);
    assert!(a.has_background());
    let bg: Vec<u32> = serde_wasm_bindgen::from_value(m.get("bg")).unwrap();
    assert_eq!(bg, vec![2, 1, 8]);
}

#[wasm_bindgen_test]
fn missing_context_still_mounts() {
    let m = Mock::new();
    m.set("hasContext", &JsValue::FALSE);
    let args = js(r#"{"canvasWidth": 1, "canvasHeight": 1, "imageData": [0, 0, 0, 255],
                       "rects": [{"top": 0, "left": 0, "width": 1, "height": 1}]}"#);
    let a = mount(&m, args);
    assert!(!a.has_background());
    assert_eq!(a.region_count(), 1);
}

#[wasm_bindgen_test]
fn press_drag_release_adds_region() {
    let m = Mock::new();
    let mut a = mount(&m, two_regions());
    assert!(a.begin_add());
    assert_eq!(m.listeners(), vec!["down", "move", "up"]);
    assert!(a.pointer_down_at(120.0, 60.0, false).is_null());
    // preview drawn but not reported
    assert_eq!(m.count(), 3);
    assert!(a.pointer_move_at(100.0, 40.0).is_null());
    let p = json(a.pointer_up_at(100.0, 40.0));
    assert_eq!(p["rects"].as_array().unwrap().len(), 3);
    assert_eq!(p["rects"][2]["left"].as_f64(), Some(100.0));
    assert_eq!(p["rects"][2]["top"].as_f64(), Some(40.0));
    assert_eq!(p["rects"][2]["width"].as_f64(), Some(20.0));
    assert_eq!(p["rects"][2]["label"], json!(""));
    assert!(!a.is_drawing());
    assert!(m.listeners().is_empty());
    assert_eq!(m.count(), 3);
}

#[wasm_bindgen_test]
fn dom_events_go_through_get_pointer() {
    let m = Mock::new();
    let mut a = mount(&m, js(r#"{"canvasWidth": 200, "canvasHeight": 100}"#));
    a.begin_add();
    a.pointer_down(js(r#"{"clientX": 5, "clientY": 5, "button": 0}"#));
    a.pointer_move(js(r#"{"clientX": 25, "clientY": 15, "button": 0}"#));
    let p = json(a.pointer_up(js(r#"{"clientX": 25, "clientY": 15, "button": 0}"#)));
    assert_eq!(p["rects"][0]["width"].as_f64(), Some(20.0));
    assert_eq!(p["rects"][0]["height"].as_f64(), Some(10.0));
}

#[wasm_bindgen_test]
fn secondary_button_cancels_draw() {
    let m = Mock::new();
    let mut a = mount(&m, two_regions());
    a.begin_add();
    a.pointer_down_at(10.0, 10.0, false);
    a.pointer_move_at(30.0, 30.0);
    assert!(a.pointer_down_at(30.0, 30.0, true).is_null());
    assert!(!a.is_drawing());
    assert_eq!(m.count(), 2);
    assert!(m.listeners().is_empty());
    assert_eq!(a.region_count(), 2);
}

#[wasm_bindgen_test]
fn remove_selected_reports_remaining() {
    let m = Mock::new();
    let mut a = mount(&m, two_regions());
    assert!(a.remove_selected().is_null());
    let h = a.handle_of(0).unwrap();
    m.select(h);
    assert_eq!(a.selected_region(), Some(0));
    let p = json(a.remove_selected());
    let rects = p["rects"].as_array().unwrap();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0]["left"].as_f64(), Some(80.0));
    assert_eq!(rects[0]["label"], json!("B"));
    assert_eq!(a.region_of(h), None);
}

#[wasm_bindgen_test]
fn host_edit_is_reported() {
    let m = Mock::new();
    let mut a = mount(&m, two_regions());
    let h = a.handle_of(1).unwrap();
    m.call("setRectBounds", &[JsValue::from_f64(h as f64), js(r#"{"left": 90, "top": 30, "width": 30, "height": 50}"#)]);
    let p = json(a.object_modified(h));
    assert_eq!(p["rects"][1]["left"].as_f64(), Some(90.0));
    assert_eq!(p["rects"][1]["height"].as_f64(), Some(50.0));
    assert_eq!(p["rects"][1]["label"], json!("B"));
}

#[wasm_bindgen_test]
fn clear_then_reset() {
    let m = Mock::new();
    let mut a = mount(&m, two_regions());
    let p = json(a.clear());
    assert_eq!(p, json!({"rects": []}));
    assert_eq!(m.count(), 0);
    let p = json(a.reset());
    assert_eq!(p["rects"].as_array().unwrap().len(), 2);
    assert_eq!(p["rects"][0]["label"], json!("A"));
    assert_eq!(m.count(), 2);
}

#[wasm_bindgen_test]
fn structured_labels_pass_through() {
    let m = Mock::new();
    let mut a = mount(&m, two_regions());
    let label = js(r#"{"comment": "scratch", "user": "ana", "time": "t0", "reply": []}"#);
    let p = json(a.set_label(1, label));
    assert_eq!(p["rects"][1]["label"]["comment"], json!("scratch"));
    let regions = json(a.regions());
    assert_eq!(regions[1]["id"].as_f64(), Some(1.0));
    assert_eq!(regions[1]["label"]["user"], json!("ana"));
}

#[wasm_bindgen_test]
fn update_args_remounts_on_new_canvas() {
    let m = Mock::new();
    let mut a = mount(&m, two_regions());
    // same scene: only the snapshot changes
    let same = js(r#"{"canvasWidth": 200, "canvasHeight": 100, "rects": []}"#);
    assert!(a.update_args(same).is_null());
    assert_eq!(a.region_count(), 2);
    let bigger = js(r#"{"canvasWidth": 400, "canvasHeight": 100,
                        "rects": [{"top": 1, "left": 1, "width": 2, "height": 2, "label": "C"}]}"#);
    let p = json(a.update_args(bigger));
    assert_eq!(p["rects"][0]["label"], json!("C"));
    assert_eq!(m.count(), 1);
}

#[wasm_bindgen_test]
fn region_style_follows_box_color() {
    let m = Mock::new();
    let a = mount(&m, js(r#"{"canvasWidth": 50, "canvasHeight": 50, "boxColor": "lime",
                             "rects": [{"top": 1, "left": 1, "width": 2, "height": 2}]}"#));
    let h = a.handle_of(0).unwrap();
    let s = json(m.call("style", &[JsValue::from_f64(h as f64)]));
    assert_eq!(s["stroke"], json!("lime"));
    assert_eq!(s["interactive"], json!(true));
    assert_eq!(s["fill"], serde_json::Value::Null);
}

#[wasm_bindgen_test]
fn theme_tracks_host() {
    let m = Mock::new();
    let mut a = mount(&m, two_regions());
    a.theme_changed(true);
    assert_eq!(a.theme(), "dark");
    a.theme_changed(false);
    assert_eq!(a.theme(), "light");
}
