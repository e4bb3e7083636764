use crate::config::EngineConfig;
use crate::guide::direction::{angle_between, cluster_directions, DirectionVector};
use crate::property::arrow::{Arrow, ArrowOverlay, INTERSECTION_STATE_COLOR, INTERSECTION_STATE_TEXT};
use pathlight_detect::{PixelBox, PixelPoint};

/// Vectors from the stop-box center to each go-box center that are neither
/// degenerate nor farther than the proximity threshold (stop-box width times
/// `proximity_factor`). Go boxes are shared across stop boxes; there is no
/// per-stop deduplication.
pub fn candidate_vectors(
    stop: &PixelBox,
    go_boxes: &[PixelBox],
    proximity_factor: f64,
) -> Vec<DirectionVector> {
    let stop_center = stop.center();
    let proximity_threshold = stop.width() as f64 * proximity_factor;

    go_boxes
        .iter()
        .map(|go| DirectionVector::between(stop_center, go.center()))
        .filter(|vector| {
            let norm = vector.norm();
            norm > 0.0 && norm < proximity_threshold
        })
        .collect()
}

/// Picks the directions worth announcing at an intersection.
///
/// Only forward-looking directions qualify: normalized dy below
/// `forward_dy_limit` (y grows downward, so mostly-downward vectors point
/// back at the user). The anchor is the most forward-pointing of those, ties
/// going to the earlier candidate, and it always leads the result. Every
/// other forward-looking direction within `branch_angle_deg` of the anchor
/// follows as a branch.
pub fn select_directions(
    clustered: &[DirectionVector],
    forward_dy_limit: f64,
    branch_angle_deg: f64,
) -> Vec<DirectionVector> {
    let forward: Vec<DirectionVector> = clustered
        .iter()
        .filter(|vector| vector.normalized().dy < forward_dy_limit)
        .copied()
        .collect();

    let anchor = match forward
        .iter()
        .fold(None::<DirectionVector>, |best, vector| match best {
            Some(best) if best.dy <= vector.dy => Some(best),
            _ => Some(*vector),
        }) {
        Some(anchor) => anchor,
        None => return Vec::new(),
    };

    // Exclusion is by value: any direction numerically equal to the anchor
    // is the anchor as far as the output is concerned, never a branch.
    let mut selected = vec![anchor];
    for vector in &forward {
        if *vector != anchor && angle_between(&anchor, vector) < branch_angle_deg {
            selected.push(*vector);
        }
    }
    selected
}

/// Guidance arrows radiating from one stop box. Each selected direction is
/// normalized and scaled to `arrow_length` pixels; endpoints truncate toward
/// zero back into integer pixel space.
pub fn arrows_for_stop(
    stop: &PixelBox,
    go_boxes: &[PixelBox],
    arrow_length: f64,
    config: &EngineConfig,
) -> Vec<Arrow> {
    let candidates = candidate_vectors(stop, go_boxes, config.proximity_factor);
    if candidates.is_empty() {
        return Vec::new();
    }

    let clustered = cluster_directions(&candidates, config.cluster_angle_deg);
    let selected = select_directions(&clustered, config.forward_dy_limit, config.branch_angle_deg);

    let stop_center = stop.center();
    selected
        .iter()
        .map(|vector| {
            let unit = vector.normalized();
            let end = PixelPoint {
                x: (stop_center.x as f64 + unit.dx * arrow_length) as i32,
                y: (stop_center.y as f64 + unit.dy * arrow_length) as i32,
            };
            Arrow::intersection(stop_center, end)
        })
        .collect()
}

/// Overlay for the intersection branch: arrows for every merged stop box
/// plus the state banner. The arrow list may come out empty when every
/// candidate fails the proximity or forward filters; the banner still says
/// Intersection.
pub fn intersection_overlay(
    stop_boxes: &[PixelBox],
    go_boxes: &[PixelBox],
    arrow_length: f64,
    config: &EngineConfig,
) -> ArrowOverlay {
    let mut arrows = Vec::new();
    for stop in stop_boxes {
        arrows.extend(arrows_for_stop(stop, go_boxes, arrow_length, config));
    }
    ArrowOverlay {
        arrows,
        state_text: INTERSECTION_STATE_TEXT.to_string(),
        state_color: INTERSECTION_STATE_COLOR.to_string(),
    }
}
