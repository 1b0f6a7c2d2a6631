use boxlabel::{ArgsError, Comment, MountArgs};
use serde_json::json;

#[test]
fn host_args_parse_with_defaults() {
    let v = json!({
        "canvasWidth": 2,
        "canvasHeight": 2,
        "imageData": [0,0,0,255, 0,0,0,255, 0,0,0,255, 0,0,0,255],
        "rects": [ {"top": 10.0, "left": 10.0, "width": 50.0, "height": 50.0, "label": "A"},
                   {"top": 1.0, "left": 2.0, "width": 3.0, "height": 4.0} ]
    });
    let args = MountArgs::<String>::from_json_value(v).unwrap();
    assert_eq!(args.box_color, "red");
    assert_eq!(args.rects[1].label, "");
    assert_eq!(args.rects[0].bounds().left, 10.0);
    assert!(args.raster().unwrap().is_some());
}

#[test]
fn structured_labels_parse() {
    let v = json!({
        "canvasWidth": 10, "canvasHeight": 10, "boxColor": "blue",
        "rects": [ {"top": 0, "left": 0, "width": 5, "height": 5,
                    "label": {"comment": "dent", "user": "ana", "time": "", "reply": [{"user": "bo", "reply": "ok"}]}} ]
    });
    let args = MountArgs::<Comment>::from_json_value(v).unwrap();
    assert_eq!(args.rects[0].label.reply[0].user, "bo");
    assert!(args.raster().unwrap().is_none());
}

#[test]
fn malformed_args_report_parse_code() {
    let e = MountArgs::<String>::from_json_value(json!({"canvasWidth": "wide"})).unwrap_err();
    assert_eq!(e.code(), "json_parse");
}

#[test]
fn oversized_canvas_is_out_of_range() {
    let e = MountArgs::<String>::from_json_value(json!({"canvasWidth": 100_000, "canvasHeight": 10})).unwrap_err();
    assert!(matches!(e, ArgsError::OutOfRange { param: "canvasWidth", .. }));
}

#[test]
fn pixel_length_must_match_canvas() {
    let v = json!({"canvasWidth": 2, "canvasHeight": 2, "imageData": [1, 2, 3]});
    let e = MountArgs::<String>::from_json_value(v).unwrap_err();
    assert_eq!(e.code(), "size_mismatch");
}

#[test]
fn too_many_regions_rejected() {
    let rects: Vec<_> = (0..10_001).map(|_| json!({"top": 0, "left": 0, "width": 1, "height": 1})).collect();
    let e = MountArgs::<String>::from_json_value(json!({"canvasWidth": 10, "canvasHeight": 10, "rects": rects})).unwrap_err();
    assert_eq!(e.code(), "too_many_regions");
}

#[test]
fn huge_numbers_are_rejected() {
    let v = json!({"canvasWidth": 10, "canvasHeight": 10,
                   "rects": [{"top": 0, "left": 1.0e38, "width": 1, "height": 1}]});
    assert_eq!(MountArgs::<String>::from_json_value(v).unwrap_err().code(), "out_of_range");
    let v = json!({"canvasWidth": 10, "canvasHeight": 10,
                   "rects": [{"top": 0, "left": 0, "width": -4, "height": 1}]});
    assert_eq!(MountArgs::<String>::from_json_value(v).unwrap_err().code(), "out_of_range");
}
