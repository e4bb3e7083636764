use crate::config::EngineConfig;
use crate::property::detection::{
    Detection, CLASS_GO_FORWARD, CLASS_SCOOTER, CLASS_SOUND_BUTTON, CLASS_STOP,
};
use log::{debug, error};
use pathlight_detect::{DetectorSet, Frame, ModelKind};

/// Maps a model-local class id to its semantic name.
/// The scooter and button models are single-class; whatever id they report
/// means the one thing they detect.
pub fn class_name(kind: ModelKind, class_id: u32) -> String {
    match kind {
        ModelKind::Block => match class_id {
            0 => CLASS_GO_FORWARD.to_string(),
            1 => CLASS_STOP.to_string(),
            other => format!("Block_Class_{other}"),
        },
        ModelKind::Scooter => CLASS_SCOOTER.to_string(),
        ModelKind::Button => CLASS_SOUND_BUTTON.to_string(),
    }
}

/// Runs every available model on the frame and concatenates the accepted
/// detections in model order (block, scooter, button), keeping each model's
/// internal ordering.
///
/// An unavailable model contributes nothing. A model whose invocation fails
/// is logged and likewise contributes nothing; the remaining models still
/// run. Detections below the per-model confidence threshold are dropped.
pub fn collect_detections(
    detectors: &DetectorSet,
    frame: &Frame,
    config: &EngineConfig,
) -> Vec<Detection> {
    let mut detections = Vec::new();

    for kind in ModelKind::ALL {
        let raw = match detectors.detect(kind, frame) {
            None => {
                debug!("{kind} model unavailable, skipping");
                continue;
            }
            Some(Err(error)) => {
                error!("{kind} model failed, treating as no detections: {error:#}");
                continue;
            }
            Some(Ok(raw)) => raw,
        };

        let threshold = config.confidence_for(kind);
        for raw_detection in raw {
            if raw_detection.confidence >= threshold {
                detections.push(Detection {
                    class_name: class_name(kind, raw_detection.class_id),
                    confidence: raw_detection.confidence,
                    bounds: raw_detection.bounds,
                    source: kind,
                });
            }
        }
    }

    detections
}
