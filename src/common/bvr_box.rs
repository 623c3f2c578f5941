use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in `(x1, y1, x2, y2)` form.
///
/// `x1 <= x2` and `y1 <= y2` are expected but not enforced; inverted boxes give
/// negative extents which the overlap primitives clip away.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct BvrBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BvrBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Reads the first four columns of a box row.
    pub fn from_row(row: ArrayView1<f32>) -> Self {
        Self::new(row[0], row[1], row[2], row[3])
    }

    /// Returns the width of the bounding box under the given offset.
    pub fn width(&self, offset: f32) -> f32 {
        self.x2 - self.x1 + offset
    }

    /// Returns the height of the bounding box under the given offset.
    pub fn height(&self, offset: f32) -> f32 {
        self.y2 - self.y1 + offset
    }

    /// Computes the area of the bounding box. Not clipped: inverted boxes
    /// have a negative area.
    pub fn area(&self, offset: f32) -> f32 {
        self.width(offset) * self.height(offset)
    }

    /// Returns the center x-coordinate of the bounding box.
    pub fn cx(&self) -> f32 {
        (self.x1 + self.x2) / 2.
    }

    /// Returns the center y-coordinate of the bounding box.
    pub fn cy(&self) -> f32 {
        (self.y1 + self.y2) / 2.
    }

    /// Computes the intersection area between this bounding box and another,
    /// each side clipped to zero.
    pub fn intersect(&self, other: &BvrBox, offset: f32) -> f32 {
        let left = self.x1.max(other.x1);
        let top = self.y1.max(other.y1);
        let right = self.x2.min(other.x2);
        let bottom = self.y2.min(other.y2);

        let w = (right - left + offset).max(0.);
        let h = (bottom - top + offset).max(0.);
        w * h
    }

    /// Returns the box as a detection row `[x1, y1, x2, y2, score]`.
    pub fn to_det_row(&self, score: f32) -> [f32; 5] {
        [self.x1, self.y1, self.x2, self.y2, score]
    }
}
