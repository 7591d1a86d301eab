// CLASSIFICATION: COMMUNITY
// Filename: args.rs v0.3
// Date Modified: 2026-10-19
// Author: Lukas Bower
//
// ─────────────────────────────────────────────────────────────
// Cohesix · Boot Argument View
//
// Early userspace receives the kernel command line already split
// into an argument vector. Helpers look parameters up by prefix
// (`resume=`) or as bare flags (`noresume`).
//
// Example cmdline:
//
//   root=/dev/nvme0n1p2 resume=/dev/nvme0n1p3 resume_offset=0x800 quiet
//
// # Public API
// * [`BootParams`] – lookup interface consumed by boot helpers
// * [`BootArgs`] – owned argument vector implementing it
// * [`parse_cmdline`] – split a raw cmdline string → [`BootArgs`]
// ─────────────────────────────────────────────────────────────

#![forbid(unsafe_code)]

/// Read-only access to boot parameters.
pub trait BootParams {
    /// Value of the first argument starting with `prefix` (e.g. `"resume="`).
    ///
    /// Arguments whose value after the prefix is empty are skipped.
    fn get_arg(&self, prefix: &str) -> Option<&str>;

    /// `true` if an argument equals `name` exactly.
    fn get_flag(&self, name: &str) -> bool;
}

/// Ordered list of boot arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootArgs {
    args: Vec<String>,
}

impl BootArgs {
    /// Build from an argument vector (program name excluded).
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: argv.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of arguments held.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// `true` when no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl BootParams for BootArgs {
    fn get_arg(&self, prefix: &str) -> Option<&str> {
        self.args
            .iter()
            .filter_map(|a| a.strip_prefix(prefix))
            .find(|v| !v.is_empty())
    }

    fn get_flag(&self, name: &str) -> bool {
        self.args.iter().any(|a| a == name)
    }
}

/// Split a raw command‑line string on ASCII whitespace.
///
/// # Examples
///
/// ```
/// use cohesix_resume::bootloader::args::{parse_cmdline, BootParams};
///
/// let args = parse_cmdline("root=/dev/sda1 noresume");
/// assert_eq!(args.get_arg("root="), Some("/dev/sda1"));
/// assert!(args.get_flag("noresume"));
/// ```
pub fn parse_cmdline(cmdline: &str) -> BootArgs {
    BootArgs::from_argv(cmdline.split_ascii_whitespace())
}

// ───────────────────────────── tests ─────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_empty_match_wins() {
        let args = parse_cmdline("resume= resume=/dev/sda2 resume=/dev/sda3");
        assert_eq!(args.get_arg("resume="), Some("/dev/sda2"));
    }

    #[test]
    fn prefix_does_not_match_longer_key() {
        let args = parse_cmdline("resume_offset=12");
        assert_eq!(args.get_arg("resume="), None);
        assert_eq!(args.get_arg("resume_offset="), Some("12"));
    }

    #[test]
    fn flags_match_whole_tokens_only() {
        let args = parse_cmdline("noresume=1 hibernate=noresume");
        assert!(!args.get_flag("noresume"));
        assert_eq!(args.len(), 2);
    }
}
