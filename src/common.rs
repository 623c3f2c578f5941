mod box_record;
mod bvr_box;
mod coord_offset;
mod execution_device;
mod nms_config;
mod soft_nms_method;

pub use box_record::*;
pub use bvr_box::*;
pub use coord_offset::*;
pub use execution_device::*;
pub use nms_config::*;
pub use soft_nms_method::*;
