use serde::{Deserialize, Serialize};

pub type RegionId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Bounds {
            left,
            top,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Rectangle spanning two opposite corners in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Bounds {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Zero-size rectangle sitting on `p`.
    pub fn at(p: Point) -> Self {
        Bounds {
            left: p.x,
            top: p.y,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// A labeled rectangle as held by the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct Region<L> {
    pub id: RegionId,
    pub bounds: Bounds,
    pub label: L,
}

/// Inbound region as delivered by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialRegion<L> {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub label: L,
}

impl<L> InitialRegion<L> {
    pub fn new(bounds: Bounds, label: L) -> Self {
        InitialRegion {
            top: bounds.top,
            left: bounds.left,
            width: bounds.width,
            height: bounds.height,
            label,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.width, self.height)
    }
}

/// Outbound region: live bounding box plus the stored label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectPayload<L> {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub label: L,
}

impl<L> RectPayload<L> {
    pub fn new(bounds: Bounds, label: L) -> Self {
        RectPayload {
            top: bounds.top,
            left: bounds.left,
            width: bounds.width,
            height: bounds.height,
            label,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.width, self.height)
    }
}

/// Value reported to the host after every mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payload<L> {
    pub rects: Vec<RectPayload<L>>,
}

impl<L> Payload<L> {
    pub fn empty() -> Self {
        Payload { rects: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_in_any_order() {
        let a = Point::new(150.0, 40.0);
        let b = Point::new(100.0, 140.0);
        let r = Bounds::from_corners(a, b);
        assert_eq!(r, Bounds::new(100.0, 40.0, 50.0, 100.0));
        assert_eq!(r, Bounds::from_corners(b, a));
    }

    #[test]
    fn degenerate_rect_is_empty() {
        assert!(Bounds::from_corners(Point::new(5.0, 5.0), Point::new(5.0, 9.0)).is_empty());
        assert!(Bounds::at(Point::new(3.0, 3.0)).is_empty());
        assert!(!Bounds::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn payload_field_names() {
        let p = Payload {
            rects: vec![RectPayload::new(Bounds::new(1.0, 2.0, 3.0, 4.0), "A".to_string())],
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["rects"][0]["left"], 1.0);
        assert_eq!(v["rects"][0]["top"], 2.0);
        assert_eq!(v["rects"][0]["label"], "A");
    }
}
