use std::time::{Duration, Instant};
use ndarray::{ArrayView1, ArrayView2};
use crate::common::CoordOffset;
use crate::suppression_runners::overlap::normalized_wasserstein;
use crate::suppression_runners::prep::{rank_order, to_boxes};
use crate::utils;

/// Greedy suppression using normalized Wasserstein similarity in place of IoU.
///
/// Same control flow as [`nms`](crate::suppression_runners::nms): a live box
/// suppresses every lower-ranked live box whose similarity to it is
/// `>= threshold`. Returns kept original indices in descending-score order.
pub fn wasserstein_nms(boxes: ArrayView2<f32>, scores: ArrayView1<f32>, threshold: f32, offset: CoordOffset) -> Vec<usize> {
    let nboxes = boxes.nrows();
    if nboxes == 0 {
        return Vec::new();
    }
    let now = Instant::now();

    let bboxes = to_boxes(boxes);
    let order = rank_order(scores);
    let offset = offset.value();
    let mut select = vec![true; nboxes];

    for ri in 0..nboxes {
        if !select[ri] {
            continue;
        }
        let ibox = &bboxes[order[ri]];

        for rj in (ri + 1)..nboxes {
            if !select[rj] {
                continue;
            }
            if normalized_wasserstein(ibox, &bboxes[order[rj]], offset) >= threshold {
                select[rj] = false;
            }
        }
    }

    let keep: Vec<usize> = order
        .into_iter()
        .zip(select)
        .filter_map(|(i, keep)| keep.then_some(i))
        .collect();

    utils::trace("Wasserstein-NMS", "suppress", now, Duration::ZERO);
    log::debug!("Wasserstein-NMS kept {} of {} boxes (threshold={})", keep.len(), nboxes, threshold);
    keep
}
