// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Date Modified: 2026-10-19
// Author: Lukas Bower

/// Bounded formatting for sysfs attribute values.
pub mod format;

/// Command line integer parsing.
pub mod num;
