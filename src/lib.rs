// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Early-boot resume-from-hibernation support for Cohesix.
//!
//! Decides whether the kernel should resume from a suspend-to-disk image and,
//! if so, programs `/sys/power` to trigger it. Every failure degrades into a
//! normal boot.

/// Boot argument view consumed by the resume decision.
pub mod bootloader;

/// Resume helper configuration (build-time default device, paths).
pub mod config;

/// Device specifier resolution.
pub mod device;

/// Resume decision, activation and kernel default offset lookup.
pub mod resume;

/// Small formatting and parsing helpers shared by early-boot code.
pub mod utils;

pub use resume::{attempt_resume, ActivationResult, Outcome, Resumer};
