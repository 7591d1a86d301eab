// CLASSIFICATION: COMMUNITY
// Filename: default_offset.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Kernel default resume offset.
//!
//! Kernels without a writable `resume_offset` attribute still honour
//! `resume_offset=` from their own command line. When the attribute is
//! missing we can only go ahead if that built-in value already matches.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use log::debug;

use crate::utils::num::parse_decimal_prefix;

/// Upper bound on the kernel command line we look at.
pub const CMDLINE_READ_MAX: usize = 4095;

const HIBERNATE_NORESUME: &[u8] = b"hibernate=noresume";
const HIBERNATE_NO: &[u8] = b"hibernate=no";
const RESUME_OFFSET: &[u8] = b"resume_offset=";

/// Offset the kernel is using when nobody writes `resume_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultOffset {
    /// The command line could not be read.
    Unknown,
    Explicit(u64),
}

impl fmt::Display for DefaultOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultOffset::Unknown => f.write_str("unknown"),
            DefaultOffset::Explicit(v) => write!(f, "{v}"),
        }
    }
}

/// Anything able to report the kernel's default offset.
pub trait DefaultOffsetSource {
    fn read_default(&self) -> DefaultOffset;
}

impl DefaultOffsetSource for DefaultOffset {
    fn read_default(&self) -> DefaultOffset {
        *self
    }
}

/// Reads the default offset from `/proc/cmdline`.
#[derive(Debug, Clone)]
pub struct KernelCmdline {
    path: PathBuf,
}

impl KernelCmdline {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DefaultOffsetSource for KernelCmdline {
    fn read_default(&self) -> DefaultOffset {
        let mut buf = Vec::with_capacity(CMDLINE_READ_MAX);
        let res = File::open(&self.path)
            .and_then(|f| f.take(CMDLINE_READ_MAX as u64).read_to_end(&mut buf));
        match res {
            Ok(_) => parse_default_offset(&buf),
            Err(e) => {
                debug!("resume: cannot read {}: {e}", self.path.display());
                DefaultOffset::Unknown
            }
        }
    }
}

/// Scan a kernel command line for the offset it will use.
///
/// Starts at `Explicit(0)`. Each `resume_offset=<decimal>` replaces the
/// value; an unparsable one is ignored. `hibernate=noresume` (or its short
/// form `hibernate=no`) forces `Explicit(0)` and ends the scan. Input past a
/// NUL byte is ignored.
pub fn parse_default_offset(cmdline: &[u8]) -> DefaultOffset {
    let text = match cmdline.iter().position(|&b| b == 0) {
        Some(nul) => &cmdline[..nul],
        None => cmdline,
    };

    let mut offset = 0;
    let tokens = text
        .split(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .filter(|t| !t.is_empty());
    for token in tokens {
        if token == HIBERNATE_NORESUME || token == HIBERNATE_NO {
            return DefaultOffset::Explicit(0);
        }
        if let Some(value) = token.strip_prefix(RESUME_OFFSET) {
            if let Some(v) = parse_decimal_prefix(value) {
                offset = v;
            }
        }
    }
    DefaultOffset::Explicit(offset)
}
