// CLASSIFICATION: COMMUNITY
// Filename: control.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Write-only hibernation attributes under `/sys/power`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use super::error::StepFailure;
use crate::utils::format::AttrBuf;

/// Attributes the resume helper writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Swap file offset of the image header, in pages.
    ResumeOffset,
    /// `major:minor` of the resume device. Writing it starts the resume.
    Resume,
}

impl Endpoint {
    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::ResumeOffset => "resume_offset",
            Endpoint::Resume => "resume",
        }
    }
}

/// Source of writable endpoint handles.
///
/// A handle is closed when dropped. `open` must report a missing attribute
/// as [`io::ErrorKind::NotFound`].
pub trait ControlSurface {
    type Handle: Write;

    fn open(&self, endpoint: Endpoint) -> io::Result<Self::Handle>;
}

/// The kernel's power control directory.
#[derive(Debug, Clone)]
pub struct SysPower {
    dir: PathBuf,
}

impl SysPower {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ControlSurface for SysPower {
    type Handle = File;

    fn open(&self, endpoint: Endpoint) -> io::Result<File> {
        // never create: a missing attribute means the kernel lacks support
        OpenOptions::new()
            .write(true)
            .open(self.dir.join(endpoint.name()))
    }
}

/// Write `value` with a single `write` call.
///
/// sysfs consumes an attribute store in one call, so anything but the full
/// length is a failure.
pub fn write_attr<W: Write, const N: usize>(
    handle: &mut W,
    value: &AttrBuf<N>,
) -> Result<(), StepFailure> {
    let expected = value.len();
    let written = handle.write(value.as_bytes()).map_err(StepFailure::Write)?;
    if written != expected {
        return Err(StepFailure::ShortWrite { written, expected });
    }
    Ok(())
}
