use std::time::{Duration, Instant};
use ndarray::{Array2, ArrayView1, ArrayView2};
use crate::common::{BoxRecord, BvrBox, CoordOffset, SoftDetections, SoftNmsMethod};
use crate::suppression_runners::overlap::iou;
use crate::utils;

/// Soft suppression with in-place compaction of the working set.
///
/// Repeatedly emits the highest-scoring remaining box, then decays the score
/// of every box still in the working set by `method`'s weight. A box whose
/// decayed score falls below `min_score` is dropped by overwriting it with the
/// last active record and shrinking the working set.
///
/// The box emitted at step `i` is not itself tested against `min_score`.
///
/// # Arguments
///
/// * `boxes` - `N×4` array of `(x1, y1, x2, y2)` rows.
/// * `scores` - `N` initial scores.
/// * `iou_threshold` - Overlap at which `Hard`/`Linear` decay applies. Unused by `Gaussian`.
/// * `sigma` - Gaussian spread, must be `> 0` for `Gaussian` (a zero sigma
///   turns non-overlapping scores into NaN). Unused by `Hard`/`Linear`.
///   [`NmsEngine::soft_nms`](crate::NmsEngine::soft_nms) rejects it up front.
/// * `min_score` - Floor below which a decayed box leaves the working set.
/// * `method` - Decay policy.
/// * `offset` - Coordinate convention for widths, heights and extents.
pub fn soft_nms(
    boxes: ArrayView2<f32>,
    scores: ArrayView1<f32>,
    iou_threshold: f32,
    sigma: f32,
    min_score: f32,
    method: SoftNmsMethod,
    offset: CoordOffset,
) -> SoftDetections {
    let nboxes = boxes.nrows();
    if nboxes == 0 {
        return SoftDetections::empty();
    }
    let now = Instant::now();
    let offset = offset.value();

    let mut records: Vec<BoxRecord> = boxes
        .outer_iter()
        .zip(scores.iter())
        .enumerate()
        .map(|(index, (row, &score))| BoxRecord::new(BvrBox::from_row(row), score, offset, index))
        .collect();
    let mut dets = Array2::<f32>::zeros((nboxes, 5));

    // Records in [0, working_size) are exactly the boxes not yet discarded.
    let mut working_size = nboxes;
    let mut i = 0;
    while i < working_size {
        let mut max_score = records[i].score;
        let mut max_pos = i;
        for pos in (i + 1)..working_size {
            if max_score < records[pos].score {
                max_score = records[pos].score;
                max_pos = pos;
            }
        }

        records.swap(i, max_pos);
        let current = records[i];
        for (col, v) in current.to_det_row().into_iter().enumerate() {
            dets[[i, col]] = v;
        }

        let mut pos = i + 1;
        while pos < working_size {
            let candidate = &mut records[pos];
            let ovr = iou(&current.bbox, &candidate.bbox, current.area, candidate.area, offset);
            candidate.score *= method.weight(ovr, iou_threshold, sigma);

            if candidate.score < min_score {
                records[pos] = records[working_size - 1];
                working_size -= 1;
                // A different record now sits at `pos`; test it before moving on.
                continue;
            }
            pos += 1;
        }
        i += 1;
    }

    let inds = records[..working_size].iter().map(|r| r.index).collect();
    let dets = dets.slice(ndarray::s![..working_size, ..]).to_owned();

    utils::trace("Soft-NMS", "suppress", now, Duration::ZERO);
    log::debug!("Soft-NMS ({}) kept {} of {} boxes", method.as_str(), working_size, nboxes);
    SoftDetections { dets, inds }
}
