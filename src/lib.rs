//! Greedy box suppression for detection post-processing.
//!
//! Four algorithms share one ranking step and one overlap primitive:
//! hard NMS, soft NMS, Wasserstein-distance NMS and NMS with match groups.
//! The free functions run sequentially on caller-provided arrays;
//! [`NmsEngine`] adds device dispatch and input-shape checks on top.

mod utils;
pub mod common;
pub mod error;
pub mod suppression_runners;

pub use crate::common::{BoxRecord, BvrBox, CoordOffset, ExecutionDevice, NmsConfig, SoftDetections, SoftNmsMethod};
pub use crate::error::Error;
pub use crate::suppression_runners::{
    areas, gather_dets, nms, nms_match, rank_order, soft_nms, wasserstein_nms, AcceleratedNms, NmsEngine,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;
