// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.3
// Date Modified: 2026-10-19
// Author: Lukas Bower
//
// ─────────────────────────────────────────────────────────────
// Cohesix · Bootloader Sub‑crate (root module)
//
// Boot argument access for the early userspace helpers that run
// before the root filesystem is mounted.
//
// Current sub‑modules
// -------------------
// * `args` – argv / cmdline view with prefix lookups
// ─────────────────────────────────────────────────────────────

/// Command‑line view used by the resume helper.
pub mod args;
