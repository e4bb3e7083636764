use pathlight_detect::PixelPoint;
use serde::Serialize;

pub const INTERSECTION_STATE_TEXT: &str = "Intersection";
pub const STRAIGHT_STATE_TEXT: &str = "Straight";

// Overlay palette carried over from the original client renderer.
pub const INTERSECTION_ARROW_COLOR: &str = "#FFFF00";
pub const STRAIGHT_ARROW_COLOR: &str = "#FF0000";
pub const INTERSECTION_STATE_COLOR: &str = "#00FF00";
pub const STRAIGHT_STATE_COLOR: &str = "#00FFFF";
pub const IDLE_STATE_COLOR: &str = "#FFFF00";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKind {
    Intersection,
    Straight,
}

/// One guidance arrow in pixel space. Pure output artifact; nothing in the
/// pipeline ever reads an arrow back.
#[derive(Debug, Clone, Serialize)]
pub struct Arrow {
    #[serde(rename = "type")]
    pub kind: ArrowKind,
    pub start: PixelPoint,
    pub end: PixelPoint,
    pub color: &'static str,
}

impl Arrow {
    pub fn intersection(start: PixelPoint, end: PixelPoint) -> Self {
        Arrow {
            kind: ArrowKind::Intersection,
            start,
            end,
            color: INTERSECTION_ARROW_COLOR,
        }
    }

    pub fn straight(start: PixelPoint, end: PixelPoint) -> Self {
        Arrow {
            kind: ArrowKind::Straight,
            start,
            end,
            color: STRAIGHT_ARROW_COLOR,
        }
    }
}

/// Arrow list plus the state banner a client renders over the frame.
#[derive(Debug, Clone, Serialize)]
pub struct ArrowOverlay {
    pub arrows: Vec<Arrow>,
    pub state_text: String,
    pub state_color: String,
}

impl Default for ArrowOverlay {
    fn default() -> Self {
        ArrowOverlay {
            arrows: Vec::new(),
            state_text: String::new(),
            state_color: IDLE_STATE_COLOR.to_string(),
        }
    }
}
