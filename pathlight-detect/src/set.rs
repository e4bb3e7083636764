use crate::detector::{Detector, ModelKind, RawDetection};
use crate::frame::Frame;
use anyhow::{anyhow, Result};
use log::warn;
use std::collections::HashMap;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Per-model optional detector capabilities.
///
/// A model may simply not be registered (it failed to load, or the
/// deployment ships without it); that is not an error and such a model
/// contributes nothing to a frame. When a timeout is configured, each
/// `detect` call runs on a worker thread and a slow or panicking model is
/// reported as a failed invocation instead of stalling the frame.
#[derive(Default, Clone)]
pub struct DetectorSet {
    detectors: HashMap<ModelKind, Arc<dyn Detector>>,
    timeout: Option<Duration>,
}

impl DetectorSet {
    pub fn new() -> Self {
        DetectorSet::default()
    }

    pub fn with_model(mut self, kind: ModelKind, detector: Arc<dyn Detector>) -> Self {
        self.detectors.insert(kind, detector);
        self
    }

    /// Bounds every subsequent detector invocation by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn is_available(&self, kind: ModelKind) -> bool {
        self.detectors.contains_key(&kind)
    }

    /// Runs one model on one frame.
    ///
    /// Returns:
    ///     None: the model is unavailable.
    ///     Some(Err(_)): the model was invoked and failed (or timed out).
    ///     Some(Ok(detections)): raw detections, possibly empty.
    pub fn detect(&self, kind: ModelKind, frame: &Frame) -> Option<Result<Vec<RawDetection>>> {
        let detector = self.detectors.get(&kind)?;
        let result = match self.timeout {
            Some(timeout) => detect_bounded(Arc::clone(detector), frame.clone(), kind, timeout),
            None => detector.detect(frame),
        };
        Some(result)
    }
}

/// Runs the blocking detect call on a detached worker so the caller can
/// give up after `timeout`. A panicking detector drops the channel sender,
/// which surfaces as a disconnect below.
fn detect_bounded(
    detector: Arc<dyn Detector>,
    frame: Frame,
    kind: ModelKind,
    timeout: Duration,
) -> Result<Vec<RawDetection>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(detector.detect(&frame));
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            warn!("{kind} model exceeded its {timeout:?} budget, dropping its detections");
            Err(anyhow!("{kind} model timed out after {timeout:?}"))
        }
        Err(RecvTimeoutError::Disconnected) => {
            warn!("{kind} model worker died mid-inference, dropping its detections");
            Err(anyhow!("{kind} model worker exited without a result"))
        }
    }
}
