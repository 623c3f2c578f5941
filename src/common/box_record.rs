use ndarray::Array2;
use serde::{Deserialize, Serialize};
use crate::common::BvrBox;

/// One movable unit of the soft-suppression working set.
///
/// Coordinates, score, area and the original index travel together, so a swap
/// or an overwrite can never separate a box from its identity.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxRecord {
    pub bbox: BvrBox,
    pub score: f32,
    pub area: f32,
    pub index: usize,
}

impl BoxRecord {
    pub fn new(bbox: BvrBox, score: f32, offset: f32, index: usize) -> Self {
        Self {
            bbox,
            score,
            area: bbox.area(offset),
            index,
        }
    }

    /// Detection row `[x1, y1, x2, y2, score]`.
    pub fn to_det_row(&self) -> [f32; 5] {
        self.bbox.to_det_row(self.score)
    }
}

/// Output of soft suppression.
///
/// Row `k` of `dets` holds the coordinates and the decayed score of box
/// `inds[k]` at the moment it was emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftDetections {
    pub dets: Array2<f32>,
    pub inds: Vec<usize>,
}

impl SoftDetections {
    pub fn empty() -> Self {
        Self {
            dets: Array2::zeros((0, 5)),
            inds: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inds.is_empty()
    }

    /// Decayed scores in emission order.
    pub fn scores(&self) -> Vec<f32> {
        self.dets.column(4).to_vec()
    }

    /// Keeps only the first `max_num` emitted boxes.
    pub fn truncate(&mut self, max_num: usize) {
        if max_num >= self.inds.len() {
            return;
        }
        self.inds.truncate(max_num);
        self.dets = self.dets.slice(ndarray::s![..max_num, ..]).to_owned();
    }
}
