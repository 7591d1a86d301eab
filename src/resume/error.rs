// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::io;

use thiserror::Error;

use super::default_offset::DefaultOffset;
use crate::utils::format::Overflow;

/// Coarse result of one activation attempt.
///
/// This is all the boot sequence ever sees; the detail lives in
/// [`ResumeError`] and is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationResult {
    /// The kernel took over and restored the image. Never observed from
    /// userspace because control does not come back.
    Resumed,
    /// The trigger was written and we are still running: no image.
    NoImage,
    InvalidDevice,
    OffsetFailed,
    ResumeTriggerFailed,
}

impl ActivationResult {
    /// `true` for outcomes that indicate a misconfiguration or missing
    /// kernel support rather than a normal boot.
    pub fn is_failure(&self) -> bool {
        !matches!(self, ActivationResult::Resumed | ActivationResult::NoImage)
    }
}

/// Why programming a single control endpoint failed.
#[derive(Debug, Error)]
pub enum StepFailure {
    #[error("open failed: {0}")]
    Open(#[source] io::Error),
    #[error("offset not supported and kernel default ({default}) differs from {requested}")]
    DefaultMismatch {
        default: DefaultOffset,
        requested: u64,
    },
    #[error(transparent)]
    Format(#[from] Overflow),
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}

/// Failure of an activation attempt, one variant per coarse outcome.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Invalid resume device: {0}")]
    InvalidDevice(String),
    #[error("Cannot write resume_offset (no software suspend kernel support, or old kernel version?): {0}")]
    Offset(#[source] StepFailure),
    #[error("Cannot write resume (no software suspend kernel support?): {0}")]
    Trigger(#[source] StepFailure),
}

impl ResumeError {
    pub fn kind(&self) -> ActivationResult {
        match self {
            ResumeError::InvalidDevice(_) => ActivationResult::InvalidDevice,
            ResumeError::Offset(_) => ActivationResult::OffsetFailed,
            ResumeError::Trigger(_) => ActivationResult::ResumeTriggerFailed,
        }
    }
}
