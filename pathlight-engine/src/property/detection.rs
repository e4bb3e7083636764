use pathlight_detect::{ModelKind, PixelBox};
use serde::Serialize;

pub const CLASS_GO_FORWARD: &str = "Go_Forward";
pub const CLASS_STOP: &str = "Stop";
pub const CLASS_SCOOTER: &str = "Scooter";
pub const CLASS_SOUND_BUTTON: &str = "Sound_Button";

/// One accepted detection: thresholded, named, and tagged with the model
/// that produced it. Frame-scoped; nothing is carried across frames.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    #[serde(rename = "class")]
    pub class_name: String,
    pub confidence: f32,
    #[serde(rename = "box")]
    pub bounds: PixelBox,
    #[serde(rename = "model")]
    pub source: ModelKind,
}

impl Detection {
    /// Block-model markers other than Stop are treated as passable path
    /// segments for geometry purposes.
    pub fn is_go_marker(&self) -> bool {
        self.source == ModelKind::Block && self.class_name != CLASS_STOP
    }

    pub fn is_stop_marker(&self) -> bool {
        self.source == ModelKind::Block && self.class_name == CLASS_STOP
    }
}
