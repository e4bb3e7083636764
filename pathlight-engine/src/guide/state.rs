use crate::property::detection::{CLASS_GO_FORWARD, CLASS_SCOOTER, CLASS_SOUND_BUTTON, CLASS_STOP};
use crate::property::message::{NavState, Navigation, Signals, TravelDirection};

pub const WARNING_OBSTACLE_DETECTED: &str = "obstacle detected";
pub const WARNING_OBSTACLE_AHEAD: &str = "obstacle ahead on forward path";
pub const OBSTACLE_SCOOTER: &str = "scooter";

/// Fuses the aggregated class list into the navigation verdict.
///
/// State precedence: a Stop marker anywhere makes the frame an
/// intersection; otherwise a Go_Forward marker makes it a straight path;
/// otherwise the frame is unknown. Obstacle and signal classes are folded
/// in independently of the path state, and a second compound warning fires
/// when an obstacle coincides with forward travel.
pub fn assess_classes(classes: &[String]) -> Navigation {
    let has = |name: &str| classes.iter().any(|class| class == name);

    let (state, direction) = if has(CLASS_STOP) {
        (NavState::Intersection, TravelDirection::Stop)
    } else if has(CLASS_GO_FORWARD) {
        (NavState::Straight, TravelDirection::Forward)
    } else {
        (NavState::Unknown, TravelDirection::None)
    };

    let mut warnings = Vec::new();
    let mut obstacles = std::collections::BTreeSet::new();
    if has(CLASS_SCOOTER) {
        warnings.push(WARNING_OBSTACLE_DETECTED.to_string());
        obstacles.insert(OBSTACLE_SCOOTER.to_string());
    }

    let signals = Signals {
        sound_button: has(CLASS_SOUND_BUTTON),
    };

    if !obstacles.is_empty() && direction == TravelDirection::Forward {
        warnings.push(WARNING_OBSTACLE_AHEAD.to_string());
    }

    Navigation {
        state,
        direction,
        warnings,
        signals,
        obstacles,
    }
}
