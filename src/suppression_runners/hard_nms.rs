use std::time::{Duration, Instant};
use ndarray::{ArrayView1, ArrayView2};
use crate::common::CoordOffset;
use crate::suppression_runners::overlap::iou;
use crate::suppression_runners::prep::{areas, rank_order, to_boxes};
use crate::utils;

/// Greedy hard suppression.
///
/// Walks the boxes by descending score; each box still alive suppresses every
/// lower-ranked live box whose IoU with it is `>= iou_threshold`.
///
/// # Arguments
///
/// * `boxes` - `N×4` array of `(x1, y1, x2, y2)` rows.
/// * `scores` - `N` confidence scores.
/// * `iou_threshold` - Overlap at which a lower-ranked box is suppressed.
/// * `offset` - Coordinate convention for widths, heights and extents.
///
/// # Returns
///
/// Original indices of the kept boxes, in descending-score order.
pub fn nms(boxes: ArrayView2<f32>, scores: ArrayView1<f32>, iou_threshold: f32, offset: CoordOffset) -> Vec<usize> {
    let nboxes = boxes.nrows();
    if nboxes == 0 {
        return Vec::new();
    }
    let now = Instant::now();

    let bboxes = to_boxes(boxes);
    let areas = areas(boxes, offset);
    let order = rank_order(scores);
    let offset = offset.value();
    let elapsed = utils::trace("NMS", "prep", now, Duration::ZERO);

    // Indexed by rank position, not by original index.
    let mut select = vec![true; nboxes];

    for ri in 0..nboxes {
        if !select[ri] {
            continue;
        }
        let i = order[ri];
        let ibox = &bboxes[i];
        let iarea = areas[i];

        for rj in (ri + 1)..nboxes {
            if !select[rj] {
                continue;
            }
            let j = order[rj];
            if iou(ibox, &bboxes[j], iarea, areas[j], offset) >= iou_threshold {
                select[rj] = false;
            }
        }
    }

    let keep: Vec<usize> = order
        .into_iter()
        .zip(select)
        .filter_map(|(i, keep)| keep.then_some(i))
        .collect();

    utils::trace("NMS", "suppress", now, elapsed);
    log::debug!("NMS kept {} of {} boxes (iou_threshold={})", keep.len(), nboxes, iou_threshold);
    keep
}
