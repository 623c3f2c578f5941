use crate::common::ExecutionDevice;

/// Errors raised by the suppression entry points.
///
/// Numeric degeneracy (zero-area boxes, empty unions) is never an error: it is
/// resolved inside the overlap primitives.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{op} is not implemented on {device}")]
    UnsupportedOnDevice {
        op: &'static str,
        device: ExecutionDevice,
    },

    #[error("{op} is not compiled with {device} support (no accelerated kernel registered)")]
    NotCompiledWithAcceleratorSupport {
        op: &'static str,
        device: ExecutionDevice,
    },

    #[error("{op} expects boxes with {expected} columns, got shape {shape:?}")]
    InvalidBoxShape {
        op: &'static str,
        expected: usize,
        shape: Vec<usize>,
    },

    #[error("{op}: boxes and scores length mismatch (boxes: {boxes}, scores: {scores})")]
    LengthMismatch {
        op: &'static str,
        boxes: usize,
        scores: usize,
    },

    #[error("unknown soft-nms method: {0}")]
    UnknownMethod(String),

    #[error("gaussian soft-nms needs a positive, finite sigma, got {0}")]
    InvalidSigma(f32),

    #[error("coordinate offset must be 0 or 1, got {0}")]
    InvalidOffset(i32),

    #[error("unknown execution device: {0}")]
    UnknownDevice(String),

    #[error("accelerated kernel failed: {0}")]
    Kernel(String),
}
