use crate::gesture::GestureProtocol;
use crate::surface::REGION_STROKE_WIDTH;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PREVIEW_STROKE: &str = "blue";
pub const DEFAULT_PREVIEW_FILL: &str = "rgba(255, 255, 255, 0.3)";

/// Per-instance behavior switches. Every field has a default, so hosts may
/// pass `{}` or omit the config altogether.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub protocol: GestureProtocol,
    /// Refuse removing the only remaining region.
    pub keep_last_region: bool,
    pub stroke_width: f32,
    pub preview_stroke: String,
    pub preview_fill: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            protocol: GestureProtocol::default(),
            keep_last_region: false,
            stroke_width: REGION_STROKE_WIDTH,
            preview_stroke: DEFAULT_PREVIEW_STROKE.to_string(),
            preview_fill: DEFAULT_PREVIEW_FILL.to_string(),
        }
    }
}

impl ControllerConfig {
    pub fn with_protocol(mut self, protocol: GestureProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn keep_last_region(mut self, keep: bool) -> Self {
        self.keep_last_region = keep;
        self
    }

    pub fn from_json_value(v: serde_json::Value) -> Result<Self, serde_json::Error> {
        if v.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_config_uses_defaults() {
        let c = ControllerConfig::from_json_value(json!({"protocol": "click_click"})).unwrap();
        assert_eq!(c.protocol, GestureProtocol::ClickClick);
        assert!(!c.keep_last_region);
        assert_eq!(c.stroke_width, 1.0);
        assert_eq!(ControllerConfig::from_json_value(json!(null)).unwrap(), ControllerConfig::default());
    }
}
