use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use crate::common::{BvrBox, CoordOffset};

/// Per-box area `(x2 - x1 + offset) * (y2 - y1 + offset)`, one entry per row.
pub fn areas(boxes: ArrayView2<f32>, offset: CoordOffset) -> Array1<f32> {
    let offset = offset.value();
    boxes
        .outer_iter()
        .map(|row| BvrBox::from_row(row).area(offset))
        .collect()
}

/// Permutation of `[0, N)` by descending score.
///
/// The sort is stable over `f32::total_cmp`: equal scores keep ascending index
/// order, and NaN scores rank without panicking. `-0.0` is folded into `0.0`
/// first so the two zeros tie.
pub fn rank_order(scores: ArrayView1<f32>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| (scores[b] + 0.0).total_cmp(&(scores[a] + 0.0)));
    order
}

/// Boxes as `BvrBox` values, indexed by original position.
pub(crate) fn to_boxes(boxes: ArrayView2<f32>) -> Vec<BvrBox> {
    boxes.outer_iter().map(BvrBox::from_row).collect()
}

/// Gathers `[x1, y1, x2, y2, score]` rows for `keep`, in keep order.
pub fn gather_dets(boxes: ArrayView2<f32>, scores: ArrayView1<f32>, keep: &[usize]) -> Array2<f32> {
    let mut dets = Array2::zeros((keep.len(), 5));
    for (row, &i) in keep.iter().enumerate() {
        let det = BvrBox::from_row(boxes.row(i)).to_det_row(scores[i]);
        for (col, v) in det.into_iter().enumerate() {
            dets[[row, col]] = v;
        }
    }
    dets
}
