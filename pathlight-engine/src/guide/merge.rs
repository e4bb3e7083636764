use crate::guide::GEOM_EPSILON;
use pathlight_detect::PixelBox;

/// Intersection-over-union of two boxes, 0.0 when they are disjoint.
pub fn iou(a: &PixelBox, b: &PixelBox) -> f64 {
    let inter = a.intersection_area(b);
    if inter == 0 {
        return 0.0;
    }
    inter as f64 / (a.area() as f64 + b.area() as f64 - inter as f64 + GEOM_EPSILON)
}

/// Deduplicates heavily overlapping boxes.
///
/// Boxes are taken largest-area first (stable, so equal areas keep their
/// input order). Each round pops the largest remaining box as a cluster
/// seed and drops every other box overlapping it at `iou_threshold` or
/// above. The seeds themselves are returned untouched; absorbed boxes are
/// discarded, never averaged.
pub fn merge_boxes(boxes: &[PixelBox], iou_threshold: f64) -> Vec<PixelBox> {
    let mut remaining: Vec<PixelBox> = boxes.to_vec();
    remaining.sort_by(|a, b| b.area().cmp(&a.area()));

    let mut merged = Vec::new();
    while !remaining.is_empty() {
        let seed = remaining.remove(0);
        remaining.retain(|other| iou(&seed, other) < iou_threshold);
        merged.push(seed);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::MERGE_IOU_THRESHOLD;

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(merge_boxes(&[], MERGE_IOU_THRESHOLD).is_empty());
    }

    #[test]
    fn near_duplicates_collapse_to_the_larger_box() {
        let big = PixelBox::new(0, 0, 100, 100);
        let dup = PixelBox::new(2, 2, 100, 100);
        let merged = merge_boxes(&[dup, big], MERGE_IOU_THRESHOLD);
        assert_eq!(merged, vec![big]);
    }

    #[test]
    fn disjoint_boxes_all_survive() {
        let a = PixelBox::new(0, 0, 50, 50);
        let b = PixelBox::new(100, 100, 150, 150);
        let c = PixelBox::new(200, 0, 260, 40);
        assert_eq!(merge_boxes(&[a, b, c], MERGE_IOU_THRESHOLD).len(), 3);
    }

    #[test]
    fn merge_is_idempotent() {
        let boxes = vec![
            PixelBox::new(0, 0, 100, 100),
            PixelBox::new(5, 5, 100, 100),
            PixelBox::new(90, 90, 200, 180),
            PixelBox::new(300, 300, 310, 310),
        ];
        let once = merge_boxes(&boxes, MERGE_IOU_THRESHOLD);
        let twice = merge_boxes(&once, MERGE_IOU_THRESHOLD);
        assert_eq!(once, twice);
    }

    #[test]
    fn overlapping_pair_never_both_survive() {
        let a = PixelBox::new(0, 0, 100, 100);
        let b = PixelBox::new(1, 0, 101, 100);
        assert!(iou(&a, &b) >= MERGE_IOU_THRESHOLD);
        let merged = merge_boxes(&[a, b], MERGE_IOU_THRESHOLD);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn equal_areas_keep_input_order() {
        let first = PixelBox::new(0, 0, 10, 10);
        let second = PixelBox::new(500, 500, 510, 510);
        let merged = merge_boxes(&[first, second], MERGE_IOU_THRESHOLD);
        assert_eq!(merged, vec![first, second]);
    }

    #[test]
    fn zero_area_boxes_pass_through() {
        let degenerate = PixelBox::new(10, 10, 10, 10);
        let normal = PixelBox::new(0, 0, 50, 50);
        let merged = merge_boxes(&[degenerate, normal], MERGE_IOU_THRESHOLD);
        assert_eq!(merged.len(), 2);
    }
}
