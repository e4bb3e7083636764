use anyhow::{Context, Result};
use pathlight_detect::{Detector, DetectorSet, Frame, ModelKind, RawDetection};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// One recorded frame: the capture dimensions plus the raw output each
/// model produced. Models absent from the recording stay absent from the
/// detector set, exercising the same degraded path a missing model takes
/// in a live deployment.
#[derive(Debug, Deserialize)]
pub struct RecordedFrame {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub models: HashMap<ModelKind, Vec<RawDetection>>,
}

impl RecordedFrame {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading recorded frame {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing recorded frame {}", path.display()))
    }

    /// A blank frame of the recorded dimensions. Replay detectors never
    /// look at pixels, only the geometry does, and that works off the
    /// recorded boxes and the frame size.
    pub fn frame(&self) -> Result<Frame> {
        Frame::blank(self.width, self.height)
    }

    pub fn detector_set(&self) -> DetectorSet {
        let mut detectors = DetectorSet::new();
        for (kind, detections) in &self.models {
            detectors =
                detectors.with_model(*kind, Arc::new(PlaybackDetector(detections.clone())));
        }
        detectors
    }
}

struct PlaybackDetector(Vec<RawDetection>);

impl Detector for PlaybackDetector {
    fn detect(&self, _frame: &Frame) -> Result<Vec<RawDetection>> {
        Ok(self.0.clone())
    }
}
