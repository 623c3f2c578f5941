use ndarray::{ArrayView1, ArrayView2};
use crate::common::{CoordOffset, ExecutionDevice};
use crate::Result;

/// A non-sequential hard-suppression kernel, e.g. a CUDA launcher.
///
/// Implementations may process pairs in any order but must select and discard
/// exactly the same boxes as [`nms`](crate::suppression_runners::nms), and
/// return them in descending-score order.
pub trait AcceleratedNms: Send + Sync {
    /// Device this kernel runs on.
    fn device(&self) -> ExecutionDevice;

    fn nms(
        &self,
        boxes: ArrayView2<f32>,
        scores: ArrayView1<f32>,
        iou_threshold: f32,
        offset: CoordOffset,
    ) -> Result<Vec<usize>>;
}
