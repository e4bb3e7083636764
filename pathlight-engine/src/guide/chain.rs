use crate::guide::PATH_SAMPLES_PER_BOX;
use crate::property::arrow::{Arrow, ArrowOverlay, STRAIGHT_STATE_COLOR, STRAIGHT_STATE_TEXT};
use pathlight_detect::{PixelBox, PixelPoint};

/// Sample points along the vertical axis of one go box.
///
/// A box tall enough to quarter yields four points down its center column,
/// each centered in its quarter. A shallow box (height under four pixels)
/// degenerates to its center point.
pub fn sample_points(go: &PixelBox) -> Vec<PixelPoint> {
    let step = go.height().div_euclid(PATH_SAMPLES_PER_BOX);
    if step <= 0 {
        return vec![go.center()];
    }

    let x = (go.x1 + go.x2).div_euclid(2);
    (0..PATH_SAMPLES_PER_BOX)
        .map(|i| PixelPoint {
            x,
            y: go.y1 + i * step + step.div_euclid(2),
        })
        .collect()
}

/// Overlay for the straight branch: sample points from every go box are
/// chained nearest-first (largest y, the bottom of the image, leads) and
/// consecutive pairs become arrows. A pair that fails to advance upward
/// (`start.y > end.y`) is skipped, not substituted, so ties never produce a
/// zero-length or backward segment.
pub fn straight_overlay(go_boxes: &[PixelBox]) -> ArrowOverlay {
    let mut points: Vec<PixelPoint> = go_boxes.iter().flat_map(sample_points).collect();
    points.sort_by(|a, b| b.y.cmp(&a.y));

    let arrows = points
        .windows(2)
        .filter(|pair| pair[0].y > pair[1].y)
        .map(|pair| Arrow::straight(pair[0], pair[1]))
        .collect();

    ArrowOverlay {
        arrows,
        state_text: STRAIGHT_STATE_TEXT.to_string(),
        state_color: STRAIGHT_STATE_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_box_yields_four_quarter_points() {
        let go = PixelBox::new(100, 100, 200, 300); // height 200, step 50
        let points = sample_points(&go);
        assert_eq!(
            points,
            vec![
                PixelPoint { x: 150, y: 125 },
                PixelPoint { x: 150, y: 175 },
                PixelPoint { x: 150, y: 225 },
                PixelPoint { x: 150, y: 275 },
            ]
        );
    }

    #[test]
    fn shallow_box_degenerates_to_its_center() {
        let go = PixelBox::new(100, 100, 200, 103); // height 3, step 0
        assert_eq!(sample_points(&go), vec![go.center()]);
    }

    #[test]
    fn chain_is_strictly_y_descending() {
        let lower = PixelBox::new(100, 300, 200, 500);
        let upper = PixelBox::new(100, 100, 200, 300);
        let overlay = straight_overlay(&[lower, upper]);

        assert_eq!(overlay.state_text, "Straight");
        assert!(!overlay.arrows.is_empty());
        for arrow in &overlay.arrows {
            assert!(arrow.start.y > arrow.end.y);
        }
        // Consecutive arrows hand over: each ends where the next starts
        for pair in overlay.arrows.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn tied_points_produce_no_arrow() {
        // Two shallow boxes side by side at the same height: both sample to
        // y = 101, so the only consecutive pair is a tie.
        let left = PixelBox::new(100, 100, 110, 103);
        let right = PixelBox::new(200, 100, 210, 103);
        let overlay = straight_overlay(&[left, right]);
        assert!(overlay.arrows.is_empty());
    }

    #[test]
    fn single_point_emits_no_arrows() {
        let go = PixelBox::new(100, 100, 200, 103);
        assert!(straight_overlay(&[go]).arrows.is_empty());
    }
}
