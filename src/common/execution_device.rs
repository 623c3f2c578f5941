use std::fmt;
use serde::{Deserialize, Serialize};

/// Where a suppression call is asked to run.
///
/// Only hard suppression has an accelerated counterpart; everything else is
/// sequential-only and must be run on `CPU`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionDevice {
    #[default] CPU,
    CUDA(usize),
}

impl ExecutionDevice {
    pub fn from_str(device: &str, device_id: usize) -> Option<Self> {
        match device.to_lowercase().as_str() {
            "cpu" => Some(ExecutionDevice::CPU),
            "cuda" => Some(ExecutionDevice::CUDA(device_id)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionDevice::CPU => "CPU",
            ExecutionDevice::CUDA(_) => "CUDA",
        }
    }

    /// True for every device that is not the sequential CPU path.
    pub fn is_accelerated(&self) -> bool {
        !matches!(self, ExecutionDevice::CPU)
    }

    pub fn is_valid_execution_device(execution_device: &str) -> bool {
        ExecutionDevice::from_str(execution_device, 0).is_some()
    }
}

impl fmt::Display for ExecutionDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionDevice::CPU => write!(f, "{}", self.as_str()),
            ExecutionDevice::CUDA(id) => write!(f, "{}:{}", self.as_str(), id),
        }
    }
}
