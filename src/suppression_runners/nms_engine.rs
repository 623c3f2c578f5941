use std::fmt;
use ndarray::{Array2, ArrayView1, ArrayView2};
use crate::common::{NmsConfig, SoftDetections, SoftNmsMethod};
use crate::error::Error;
use crate::suppression_runners::{self as runners, AcceleratedNms};
use crate::Result;

/// Dispatches suppression calls to the sequential implementation or to a
/// registered accelerated kernel, according to the configured device.
///
/// Only hard suppression may leave the CPU. Asking for any other algorithm on
/// an accelerated device is an error; there is no silent fallback.
pub struct NmsEngine {
    config: NmsConfig,
    kernel: Option<Box<dyn AcceleratedNms>>,
}

impl fmt::Debug for NmsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NmsEngine")
            .field("config", &self.config)
            .field("kernel", &self.kernel.as_ref().map(|k| k.device()))
            .finish()
    }
}

impl NmsEngine {
    pub fn new(config: NmsConfig) -> Self {
        log::debug!("Creating NMS engine on ({}) execution device", config.device);
        Self { config, kernel: None }
    }

    /// Registers the accelerated hard-suppression kernel.
    pub fn with_kernel(mut self, kernel: Box<dyn AcceleratedNms>) -> Self {
        if kernel.device() != self.config.device {
            log::warn!("Registered kernel runs on {} but engine is configured for {}",
                       kernel.device(), self.config.device);
        }
        self.kernel = Some(kernel);
        self
    }

    pub fn config(&self) -> &NmsConfig {
        &self.config
    }

    /// Hard suppression. Returns kept indices in descending-score order.
    pub fn nms(&self, boxes: ArrayView2<f32>, scores: ArrayView1<f32>) -> Result<Vec<usize>> {
        const OP: &str = "nms";
        check_boxes(OP, boxes, 4)?;
        check_lengths(OP, boxes, scores)?;

        let device = self.config.device;
        let mut keep = if device.is_accelerated() {
            let kernel = self.kernel.as_ref()
                .ok_or(Error::NotCompiledWithAcceleratorSupport { op: OP, device })?;
            let keep = kernel.nms(boxes, scores, self.config.iou_threshold, self.config.offset)?;
            if let Some(&bad) = keep.iter().find(|&&i| i >= boxes.nrows()) {
                return Err(Error::Kernel(format!("index {} out of range for {} boxes", bad, boxes.nrows())));
            }
            keep
        } else {
            runners::nms(boxes, scores, self.config.iou_threshold, self.config.offset)
        };

        if let Some(max_num) = self.config.max_num {
            keep.truncate(max_num);
        }
        Ok(keep)
    }

    /// Hard suppression, also returning the kept `[x1, y1, x2, y2, score]` rows.
    pub fn nms_with_dets(&self, boxes: ArrayView2<f32>, scores: ArrayView1<f32>) -> Result<(Array2<f32>, Vec<usize>)> {
        let keep = self.nms(boxes, scores)?;
        Ok((runners::gather_dets(boxes, scores, &keep), keep))
    }

    pub fn soft_nms(&self, boxes: ArrayView2<f32>, scores: ArrayView1<f32>) -> Result<SoftDetections> {
        const OP: &str = "softnms";
        self.require_cpu(OP)?;
        check_boxes(OP, boxes, 4)?;
        check_lengths(OP, boxes, scores)?;

        let c = &self.config;
        if c.method == SoftNmsMethod::Gaussian && !(c.sigma > 0.0 && c.sigma.is_finite()) {
            return Err(Error::InvalidSigma(c.sigma));
        }
        let mut dets = runners::soft_nms(boxes, scores, c.iou_threshold, c.sigma, c.min_score, c.method, c.offset);
        if let Some(max_num) = c.max_num {
            dets.truncate(max_num);
        }
        Ok(dets)
    }

    pub fn wasserstein_nms(&self, boxes: ArrayView2<f32>, scores: ArrayView1<f32>) -> Result<Vec<usize>> {
        const OP: &str = "wassersteinnms";
        self.require_cpu(OP)?;
        check_boxes(OP, boxes, 4)?;
        check_lengths(OP, boxes, scores)?;

        let mut keep = runners::wasserstein_nms(boxes, scores, self.config.iou_threshold, self.config.offset);
        if let Some(max_num) = self.config.max_num {
            keep.truncate(max_num);
        }
        Ok(keep)
    }

    /// Match-group suppression over packed `N×5` detections. `offset` and
    /// `max_num` do not apply: the groups always partition every input box.
    pub fn nms_match(&self, dets: ArrayView2<f32>) -> Result<Vec<Vec<usize>>> {
        const OP: &str = "nms_match";
        self.require_cpu(OP)?;
        check_boxes(OP, dets, 5)?;

        Ok(runners::nms_match(dets, self.config.iou_threshold))
    }

    fn require_cpu(&self, op: &'static str) -> Result<()> {
        let device = self.config.device;
        if device.is_accelerated() {
            log::warn!("{} requested on {}, refusing", op, device);
            return Err(Error::UnsupportedOnDevice { op, device });
        }
        Ok(())
    }
}

fn check_boxes(op: &'static str, boxes: ArrayView2<f32>, expected: usize) -> Result<()> {
    if boxes.ncols() != expected {
        return Err(Error::InvalidBoxShape { op, expected, shape: boxes.shape().to_vec() });
    }
    Ok(())
}

fn check_lengths(op: &'static str, boxes: ArrayView2<f32>, scores: ArrayView1<f32>) -> Result<()> {
    if boxes.nrows() != scores.len() {
        return Err(Error::LengthMismatch { op, boxes: boxes.nrows(), scores: scores.len() });
    }
    Ok(())
}
