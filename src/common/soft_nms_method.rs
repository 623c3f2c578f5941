use serde::{Deserialize, Serialize};
use crate::error::Error;

/// Score-decay policy applied by soft suppression to boxes overlapping the
/// box that was just emitted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoftNmsMethod {
    /// Score zeroed when the overlap reaches the threshold.
    Hard,
    /// Score scaled by `1 - iou` when the overlap reaches the threshold.
    #[default] Linear,
    /// Score scaled by `exp(-iou² / sigma)`, threshold ignored.
    Gaussian,
}

impl SoftNmsMethod {
    pub fn from_str(method: &str) -> Option<Self> {
        match method.to_lowercase().as_str() {
            "hard" | "naive" => Some(SoftNmsMethod::Hard),
            "linear" => Some(SoftNmsMethod::Linear),
            "gaussian" => Some(SoftNmsMethod::Gaussian),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoftNmsMethod::Hard => "hard",
            SoftNmsMethod::Linear => "linear",
            SoftNmsMethod::Gaussian => "gaussian",
        }
    }

    /// Weight multiplied into a compared box's score.
    pub fn weight(&self, iou: f32, iou_threshold: f32, sigma: f32) -> f32 {
        match self {
            SoftNmsMethod::Hard => if iou >= iou_threshold { 0.0 } else { 1.0 },
            SoftNmsMethod::Linear => if iou >= iou_threshold { 1.0 - iou } else { 1.0 },
            SoftNmsMethod::Gaussian => (-(iou * iou) / sigma).exp(),
        }
    }
}

impl TryFrom<i32> for SoftNmsMethod {
    type Error = Error;

    fn try_from(method: i32) -> Result<Self, Self::Error> {
        match method {
            0 => Ok(SoftNmsMethod::Hard),
            1 => Ok(SoftNmsMethod::Linear),
            2 => Ok(SoftNmsMethod::Gaussian),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }
}

impl From<SoftNmsMethod> for i32 {
    fn from(method: SoftNmsMethod) -> Self {
        match method {
            SoftNmsMethod::Hard => 0,
            SoftNmsMethod::Linear => 1,
            SoftNmsMethod::Gaussian => 2,
        }
    }
}
