use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Axis-aligned bounding box in integer pixel coordinates.
/// `x1 < x2` and `y1 < y2` for well-formed detections; y grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        PixelBox { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Center point with floor division, matching integer pixel semantics.
    pub fn center(&self) -> PixelPoint {
        PixelPoint {
            x: (self.x1 + self.x2).div_euclid(2),
            y: (self.y1 + self.y2).div_euclid(2),
        }
    }

    /// Overlap area with another box, zero if the boxes are disjoint.
    pub fn intersection_area(&self, other: &PixelBox) -> i64 {
        let overlap_w = (self.x2.min(other.x2) - self.x1.max(other.x1)).max(0);
        let overlap_h = (self.y2.min(other.y2) - self.y1.max(other.y1)).max(0);
        overlap_w as i64 * overlap_h as i64
    }
}

// Boxes travel on the wire as flat `[x1, y1, x2, y2]` arrays.
impl Serialize for PixelBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x1, self.y1, self.x2, self.y2].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PixelBox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coords = <[i32; 4]>::deserialize(deserializer)?;
        if coords[0] > coords[2] || coords[1] > coords[3] {
            return Err(D::Error::custom("box coordinates must satisfy x1<=x2, y1<=y2"));
        }
        Ok(PixelBox::new(coords[0], coords[1], coords[2], coords[3]))
    }
}

impl Serialize for PixelPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PixelPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coords = <[i32; 2]>::deserialize(deserializer)?;
        Ok(PixelPoint {
            x: coords[0],
            y: coords[1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_uses_floor_division() {
        let bounds = PixelBox::new(100, 100, 201, 151);
        assert_eq!(bounds.center(), PixelPoint { x: 150, y: 125 });
    }

    #[test]
    fn disjoint_boxes_have_zero_intersection() {
        let a = PixelBox::new(0, 0, 10, 10);
        let b = PixelBox::new(20, 20, 30, 30);
        assert_eq!(a.intersection_area(&b), 0);
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = PixelBox::new(0, 0, 100, 100);
        let b = PixelBox::new(50, 50, 150, 150);
        assert_eq!(a.intersection_area(&b), 2500);
        assert_eq!(b.intersection_area(&a), 2500);
    }
}
