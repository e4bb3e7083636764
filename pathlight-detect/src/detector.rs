use crate::frame::Frame;
use crate::graph::PixelBox;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The three independent detector models the guidance pipeline consumes.
/// Aggregation order is the order of [`ModelKind::ALL`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Tactile paving markers (Go_Forward / Stop classes).
    Block,
    /// Shared scooters left on the path.
    Scooter,
    /// Crossing sound-signal buttons.
    Button,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Block, ModelKind::Scooter, ModelKind::Button];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Block => "block",
            ModelKind::Scooter => "scooter",
            ModelKind::Button => "button",
        }
    }
}

impl Display for ModelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One raw detection as produced by a model, before thresholding and class
/// naming. `class_id` is model-local.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDetection {
    pub class_id: u32,
    pub confidence: f32,
    #[serde(rename = "box")]
    pub bounds: PixelBox,
}

/// Opaque detector capability. Implementations run whatever inference
/// backend they like; the engine only ever sees boxes and scores.
///
/// `detect` is a blocking call. Implementations must be shareable across
/// threads so a call can be bounded by a timeout worker.
pub trait Detector: Send + Sync {
    fn detect(&self, frame: &Frame) -> Result<Vec<RawDetection>>;
}
