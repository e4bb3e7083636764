use crate::guide::{
    ARROW_LENGTH_SCALE, BRANCH_ANGLE_THRESHOLD_DEG, CLUSTER_ANGLE_THRESHOLD_DEG, FORWARD_DY_LIMIT,
    MERGE_IOU_THRESHOLD, PROXIMITY_WIDTH_FACTOR,
};
use pathlight_detect::ModelKind;
use serde::Deserialize;
use std::time::Duration;

pub(crate) const DEFAULT_BLOCK_CONFIDENCE: f32 = 0.70;
pub(crate) const DEFAULT_SCOOTER_CONFIDENCE: f32 = 0.50; // Lower on purpose, scooter recall is poor
pub(crate) const DEFAULT_BUTTON_CONFIDENCE: f32 = 0.70;
pub(crate) const DEFAULT_DETECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables of the guidance pipeline. The defaults reproduce the behavior
/// of the tuned deployment; none of the geometric thresholds are known to
/// generalize beyond the original camera and lens setup, so treat them as
/// configuration rather than universal constants.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum confidence per model before a detection is kept.
    pub block_confidence: f32,
    pub scooter_confidence: f32,
    pub button_confidence: f32,
    /// Stop boxes overlapping at or above this IoU collapse into one.
    pub merge_iou: f64,
    /// Direction vectors within this many degrees of a group's first member
    /// join that group.
    pub cluster_angle_deg: f64,
    /// Non-anchor directions within this many degrees of the anchor are kept
    /// as intersection branches.
    pub branch_angle_deg: f64,
    /// A clustered direction counts as forward-looking when its normalized
    /// y component is below this (y grows downward).
    pub forward_dy_limit: f64,
    /// Go boxes farther than stop-box-width times this factor are ignored.
    pub proximity_factor: f64,
    /// Arrow length as a fraction of the image diagonal.
    pub arrow_scale: f64,
    /// Upper bound on a single detector invocation; a model that exceeds it
    /// contributes nothing to the frame. `None` runs detectors unbounded.
    pub detect_timeout: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            block_confidence: DEFAULT_BLOCK_CONFIDENCE,
            scooter_confidence: DEFAULT_SCOOTER_CONFIDENCE,
            button_confidence: DEFAULT_BUTTON_CONFIDENCE,
            merge_iou: MERGE_IOU_THRESHOLD,
            cluster_angle_deg: CLUSTER_ANGLE_THRESHOLD_DEG,
            branch_angle_deg: BRANCH_ANGLE_THRESHOLD_DEG,
            forward_dy_limit: FORWARD_DY_LIMIT,
            proximity_factor: PROXIMITY_WIDTH_FACTOR,
            arrow_scale: ARROW_LENGTH_SCALE,
            detect_timeout: Some(DEFAULT_DETECT_TIMEOUT),
        }
    }
}

impl EngineConfig {
    pub fn confidence_for(&self, kind: ModelKind) -> f32 {
        match kind {
            ModelKind::Block => self.block_confidence,
            ModelKind::Scooter => self.scooter_confidence,
            ModelKind::Button => self.button_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_deployment() {
        let config = EngineConfig::default();
        assert_eq!(config.block_confidence, 0.70);
        assert_eq!(config.scooter_confidence, 0.50);
        assert_eq!(config.merge_iou, 0.70);
        assert_eq!(config.cluster_angle_deg, 45.0);
        assert_eq!(config.branch_angle_deg, 140.0);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"scooter_confidence": 0.35}"#).unwrap();
        assert_eq!(config.scooter_confidence, 0.35);
        assert_eq!(config.block_confidence, 0.70);
    }
}
