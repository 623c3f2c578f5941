use std::time::{Duration, Instant};
use ndarray::ArrayView2;
use crate::common::CoordOffset;
use crate::suppression_runners::overlap::iou;
use crate::suppression_runners::prep::{areas, rank_order, to_boxes};
use crate::utils;

/// Hard suppression that records who suppressed whom.
///
/// `dets` is `N×5`, each row `(x1, y1, x2, y2, score)`. Widths, heights and
/// intersections use no coordinate offset.
///
/// Returns one group per kept box, in descending-score order. Each group starts
/// with the kept box's index, followed by the indices it suppressed in rank
/// order. Together the groups partition `[0, N)`.
pub fn nms_match(dets: ArrayView2<f32>, iou_threshold: f32) -> Vec<Vec<usize>> {
    let ndets = dets.nrows();
    if ndets == 0 {
        return Vec::new();
    }
    let now = Instant::now();

    let coords = dets.slice(ndarray::s![.., ..4]);
    let bboxes = to_boxes(coords);
    let areas = areas(coords, CoordOffset::Continuous);
    let order = rank_order(dets.column(4));

    // Indexed by original index.
    let mut suppressed = vec![false; ndets];
    let mut matched: Vec<Vec<usize>> = Vec::new();

    for (ri, &i) in order.iter().enumerate() {
        if suppressed[i] {
            continue;
        }
        let mut group = vec![i];
        let ibox = &bboxes[i];
        let iarea = areas[i];

        for &j in &order[(ri + 1)..] {
            if suppressed[j] {
                continue;
            }
            if iou(ibox, &bboxes[j], iarea, areas[j], 0.0) >= iou_threshold {
                suppressed[j] = true;
                group.push(j);
            }
        }
        matched.push(group);
    }

    utils::trace("NMS-Match", "suppress", now, Duration::ZERO);
    log::debug!("NMS-Match formed {} groups from {} boxes", matched.len(), ndets);
    matched
}
