use crate::property::arrow::ArrowOverlay;
use crate::property::detection::Detection;
use pathlight_detect::PixelBox;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavState {
    Unknown,
    Straight,
    Intersection,
}

impl Display for NavState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NavState::Unknown => write!(f, "unknown"),
            NavState::Straight => write!(f, "straight"),
            NavState::Intersection => write!(f, "intersection"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelDirection {
    None,
    Forward,
    Stop,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Signals {
    pub sound_button: bool,
}

/// The fused navigation verdict for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub state: NavState,
    pub direction: TravelDirection,
    pub warnings: Vec<String>,
    pub signals: Signals,
    pub obstacles: BTreeSet<String>,
}

/// Everything a client needs for one frame: accepted detections, the
/// navigation verdict, and the renderable arrow overlay. Built fresh per
/// frame and discarded after serialization.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationMessage {
    pub classes: Vec<String>,
    pub boxes: Vec<Detection>,
    pub box_coords: Vec<PixelBox>,
    pub navigation: Navigation,
    pub arrows: ArrowOverlay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(NavState::Intersection).unwrap(),
            "intersection"
        );
        assert_eq!(serde_json::to_value(TravelDirection::None).unwrap(), "none");
        assert_eq!(serde_json::to_value(TravelDirection::Stop).unwrap(), "stop");
    }
}
