mod accelerated;
mod hard_nms;
mod nms_engine;
mod nms_match;
mod soft_nms;
mod wasserstein_nms;
pub mod overlap;
pub mod prep;

pub use accelerated::AcceleratedNms;
pub use hard_nms::nms;
pub use nms_engine::NmsEngine;
pub use nms_match::nms_match;
pub use prep::{areas, gather_dets, rank_order};
pub use soft_nms::soft_nms;
pub use wasserstein_nms::wasserstein_nms;
