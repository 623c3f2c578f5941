use std::path::Path;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use crate::common::{CoordOffset, ExecutionDevice, SoftNmsMethod};

/// Parameters for one suppression call.
///
/// Every field is passed explicitly to the algorithms; nothing here is read
/// from process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NmsConfig {
    pub iou_threshold: f32,
    pub sigma: f32,
    pub min_score: f32,
    pub method: SoftNmsMethod,
    pub offset: CoordOffset,
    pub device: ExecutionDevice,
    pub max_num: Option<usize>,
}

impl Default for NmsConfig {
    fn default() -> Self {
        Self {
            iou_threshold: 0.3,
            sigma: 0.5,
            min_score: 1e-3,
            method: SoftNmsMethod::Linear,
            offset: CoordOffset::Continuous,
            device: ExecutionDevice::CPU,
            max_num: None,
        }
    }
}

impl NmsConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read NMS config {}: {}", path.display(), e))?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_iou_threshold(mut self, x: f32) -> Self {
        self.iou_threshold = x;
        self
    }

    pub fn with_sigma(mut self, x: f32) -> Self {
        self.sigma = x;
        self
    }

    pub fn with_min_score(mut self, x: f32) -> Self {
        self.min_score = x;
        self
    }

    pub fn with_method(mut self, x: SoftNmsMethod) -> Self {
        self.method = x;
        self
    }

    pub fn with_offset(mut self, x: CoordOffset) -> Self {
        self.offset = x;
        self
    }

    pub fn with_device(mut self, x: ExecutionDevice) -> Self {
        self.device = x;
        self
    }

    pub fn with_max_num(mut self, x: usize) -> Self {
        self.max_num = Some(x);
        self
    }

    pub fn to_string(&self) -> String {
        format!("IoU Threshold: {}\n\
        Sigma: {}\n\
        Min Score: {}\n\
        Soft-NMS Method: {}\n\
        Coordinate Offset: {}\n\
        Execution Device: {}\n\
        Max Results: {:?}",
                self.iou_threshold, self.sigma, self.min_score,
                self.method.as_str(), self.offset.value(),
                self.device, self.max_num)
    }
}
