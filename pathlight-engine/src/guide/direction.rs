use crate::guide::GEOM_EPSILON;
use pathlight_detect::PixelPoint;

/// 2D direction in pixel space, typically from a stop-box center toward a
/// go-box center. y grows downward, so a forward direction has negative dy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectionVector {
    pub dx: f64,
    pub dy: f64,
}

impl DirectionVector {
    pub fn new(dx: f64, dy: f64) -> Self {
        DirectionVector { dx, dy }
    }

    pub fn between(from: PixelPoint, to: PixelPoint) -> Self {
        DirectionVector {
            dx: (to.x - from.x) as f64,
            dy: (to.y - from.y) as f64,
        }
    }

    pub fn norm(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    pub fn dot(&self, other: &DirectionVector) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Unit vector; the epsilon in the denominator keeps a zero-length
    /// vector at zero instead of producing NaN.
    pub fn normalized(&self) -> Self {
        let denom = self.norm() + GEOM_EPSILON;
        DirectionVector {
            dx: self.dx / denom,
            dy: self.dy / denom,
        }
    }
}

/// Angle between two vectors in degrees.
/// A zero-length vector is defined as maximally divergent (180 degrees)
/// from everything, so degenerate candidates never join a group.
pub fn angle_between(a: &DirectionVector, b: &DirectionVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 180.0;
    }
    let cos = (a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Greedy single-link grouping of direction vectors.
///
/// Vectors are processed in input order; each one joins the first existing
/// group whose *first member* lies within `angle_threshold_deg`, otherwise
/// it starts a new group. Each output vector is the arithmetic mean of its
/// group's raw members, so longer members bias the average.
///
/// Known limitation kept for output compatibility: membership is compared
/// against the first member only, never the whole group, so the grouping is
/// order-dependent and not globally optimal. Do not upgrade this to full
/// pairwise clustering without re-tuning every downstream threshold.
pub fn cluster_directions(
    vectors: &[DirectionVector],
    angle_threshold_deg: f64,
) -> Vec<DirectionVector> {
    let mut groups: Vec<Vec<DirectionVector>> = Vec::new();

    for vector in vectors {
        match groups
            .iter_mut()
            .find(|group| angle_between(vector, &group[0]) < angle_threshold_deg)
        {
            Some(group) => group.push(*vector),
            None => groups.push(vec![*vector]),
        }
    }

    groups
        .iter()
        .map(|group| {
            let count = group.len() as f64;
            let sum = group.iter().fold(DirectionVector::new(0.0, 0.0), |acc, v| {
                DirectionVector::new(acc.dx + v.dx, acc.dy + v.dy)
            });
            DirectionVector::new(sum.dx / count, sum.dy / count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::CLUSTER_ANGLE_THRESHOLD_DEG;

    #[test]
    fn zero_vector_is_maximally_divergent() {
        let zero = DirectionVector::new(0.0, 0.0);
        let up = DirectionVector::new(0.0, -1.0);
        assert_eq!(angle_between(&zero, &up), 180.0);
        assert_eq!(angle_between(&up, &zero), 180.0);
        assert_eq!(angle_between(&zero, &zero), 180.0);
    }

    #[test]
    fn opposite_vectors_are_180_degrees_apart() {
        let up = DirectionVector::new(0.0, -1.0);
        let down = DirectionVector::new(0.0, 1.0);
        assert!((angle_between(&up, &down) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn near_parallel_vectors_share_a_group() {
        let vectors = [
            DirectionVector::new(0.0, -10.0),
            DirectionVector::new(1.0, -10.0),
        ];
        let clustered = cluster_directions(&vectors, CLUSTER_ANGLE_THRESHOLD_DEG);
        assert_eq!(clustered.len(), 1);
        // Mean of raw members, not renormalized
        assert!((clustered[0].dx - 0.5).abs() < 1e-9);
        assert!((clustered[0].dy + 10.0).abs() < 1e-9);
    }

    #[test]
    fn divergent_vectors_get_separate_groups() {
        let vectors = [
            DirectionVector::new(0.0, -10.0),
            DirectionVector::new(10.0, 0.0),
            DirectionVector::new(-10.0, 0.0),
        ];
        let clustered = cluster_directions(&vectors, CLUSTER_ANGLE_THRESHOLD_DEG);
        assert_eq!(clustered.len(), 3);
    }

    #[test]
    fn membership_compares_against_first_member_only() {
        // 0 deg and 40 deg group together; 80 deg is within 45 of the 40 deg
        // member but not of the group's first member, so it starts a new group.
        let at = |deg: f64| {
            let rad = deg.to_radians();
            DirectionVector::new(rad.sin() * 10.0, -rad.cos() * 10.0)
        };
        let clustered = cluster_directions(
            &[at(0.0), at(40.0), at(80.0)],
            CLUSTER_ANGLE_THRESHOLD_DEG,
        );
        assert_eq!(clustered.len(), 2);
    }

    #[test]
    fn every_vector_lands_in_exactly_one_group() {
        let vectors: Vec<DirectionVector> = (0..12)
            .map(|i| {
                let rad = (i as f64 * 30.0).to_radians();
                DirectionVector::new(rad.cos() * 5.0, rad.sin() * 5.0)
            })
            .collect();

        // Replay the grouping to count memberships
        let mut firsts: Vec<DirectionVector> = Vec::new();
        let mut assigned = 0usize;
        for vector in &vectors {
            match firsts
                .iter()
                .find(|first| angle_between(vector, first) < CLUSTER_ANGLE_THRESHOLD_DEG)
            {
                Some(first) => {
                    assert!(angle_between(vector, first) < CLUSTER_ANGLE_THRESHOLD_DEG);
                    assigned += 1;
                }
                None => {
                    firsts.push(*vector);
                    assigned += 1;
                }
            }
        }
        assert_eq!(assigned, vectors.len());
        assert_eq!(
            cluster_directions(&vectors, CLUSTER_ANGLE_THRESHOLD_DEG).len(),
            firsts.len()
        );
    }
}
