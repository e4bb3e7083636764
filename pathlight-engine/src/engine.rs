use crate::aggregate::collect_detections;
use crate::config::EngineConfig;
use crate::guide::chain::straight_overlay;
use crate::guide::intersection::intersection_overlay;
use crate::guide::merge::merge_boxes;
use crate::guide::state::assess_classes;
use crate::property::arrow::ArrowOverlay;
use crate::property::detection::Detection;
use crate::property::message::{NavState, NavigationMessage};
use log::debug;
use pathlight_detect::{DetectorSet, Frame, PixelBox};

/// The per-frame guidance pipeline: detectors in, serialized navigation
/// message out. Holds no mutable state; concurrent frames only share the
/// read-only detector handles and configuration.
pub struct GuidanceEngine {
    detectors: DetectorSet,
    config: EngineConfig,
}

impl GuidanceEngine {
    pub fn new(detectors: DetectorSet, config: EngineConfig) -> Self {
        let detectors = match config.detect_timeout {
            Some(timeout) => detectors.with_timeout(timeout),
            None => detectors,
        };
        GuidanceEngine { detectors, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Processes one frame. Malformed images never get this far: `Frame`
    /// construction already rejects them, so every call here produces a
    /// message — worst case an unknown state with nothing in it.
    pub fn process(&self, frame: &Frame) -> NavigationMessage {
        let detections = collect_detections(&self.detectors, frame, &self.config);
        let message = build_message(detections, frame.width(), frame.height(), &self.config);
        debug!(
            "frame {}x{}: {} detections, state {}",
            frame.width(),
            frame.height(),
            message.classes.len(),
            message.navigation.state
        );
        message
    }
}

/// Pure core shared by every entry point: turns one frame's accepted
/// detections into the final message. Arrow generation is gated on the
/// state machine, so an unknown state always carries an empty overlay.
pub fn build_message(
    detections: Vec<Detection>,
    width: u32,
    height: u32,
    config: &EngineConfig,
) -> NavigationMessage {
    let classes: Vec<String> = detections
        .iter()
        .map(|detection| detection.class_name.clone())
        .collect();
    let navigation = assess_classes(&classes);

    let mut stop_boxes: Vec<PixelBox> = Vec::new();
    let mut go_boxes: Vec<PixelBox> = Vec::new();
    for detection in &detections {
        if detection.is_stop_marker() {
            stop_boxes.push(detection.bounds);
        } else if detection.is_go_marker() {
            go_boxes.push(detection.bounds);
        }
    }

    // Arrow length scales with the image diagonal, truncated to whole pixels.
    let diagonal = ((width as f64).powi(2) + (height as f64).powi(2)).sqrt();
    let arrow_length = (diagonal * config.arrow_scale).trunc();

    let arrows = match navigation.state {
        NavState::Intersection => {
            let merged_stops = merge_boxes(&stop_boxes, config.merge_iou);
            if go_boxes.is_empty() {
                // A terminus with no visible onward path: state stands, but
                // there is no direction to draw.
                ArrowOverlay::default()
            } else {
                intersection_overlay(&merged_stops, &go_boxes, arrow_length, config)
            }
        }
        NavState::Straight => straight_overlay(&go_boxes),
        NavState::Unknown => ArrowOverlay::default(),
    };

    let box_coords = detections.iter().map(|detection| detection.bounds).collect();

    NavigationMessage {
        classes,
        boxes: detections,
        box_coords,
        navigation,
        arrows,
    }
}
