// CLASSIFICATION: COMMUNITY
// Filename: format.rs v0.2
// Date Modified: 2026-10-19
// Author: Lukas Bower
//
// ─────────────────────────────────────────────────────────────
// Cohesix · Utility Format Helpers
//
// * [`AttrBuf`] – fixed-capacity buffer for sysfs attribute
//   values; formatting past the end is an error, never a silent
//   truncation.
//
// No heap allocation so the helpers stay usable from early-boot
// code.
// ─────────────────────────────────────────────────────────────

#![forbid(unsafe_code)]

use core::fmt;

/// Capacity used for `/sys/power` attribute values.
pub const ATTR_VALUE_MAX: usize = 64;

/// Returned when a formatted value does not fit an [`AttrBuf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("formatted value exceeds {capacity} bytes")]
pub struct Overflow {
    /// Capacity of the buffer that overflowed.
    pub capacity: usize,
}

/// Bounded ASCII buffer.
///
/// A value is only accepted if it fits with one byte to spare, so the
/// usable length is `N - 1`.
///
/// ```
/// use cohesix_resume::utils::format::AttrBuf;
///
/// let buf = AttrBuf::<64>::format(format_args!("{}:{}", 8, 3)).unwrap();
/// assert_eq!(buf.as_bytes(), b"8:3");
/// assert!(AttrBuf::<4>::format(format_args!("{}", 12345)).is_err());
/// ```
#[derive(Clone)]
pub struct AttrBuf<const N: usize = ATTR_VALUE_MAX> {
    bytes: [u8; N],
    len: usize,
    overflowed: bool,
}

impl<const N: usize> AttrBuf<N> {
    /// Format `args` into a fresh buffer or report overflow.
    pub fn format(args: fmt::Arguments<'_>) -> Result<Self, Overflow> {
        let mut buf = Self {
            bytes: [0; N],
            len: 0,
            overflowed: false,
        };
        let res = fmt::write(&mut buf, args);
        if buf.overflowed || res.is_err() {
            return Err(Overflow { capacity: N });
        }
        Ok(buf)
    }

    /// The formatted bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of formatted bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if nothing was formatted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> fmt::Write for AttrBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end >= N {
            self.overflowed = true;
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for AttrBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AttrBuf")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_u64_fits_default_capacity() {
        let buf = AttrBuf::<ATTR_VALUE_MAX>::format(format_args!("{}", u64::MAX)).unwrap();
        assert_eq!(buf.as_bytes(), b"18446744073709551615");
    }

    #[test]
    fn exact_capacity_is_overflow() {
        // 4 bytes into a 4 byte buffer leaves no spare byte.
        let err = AttrBuf::<4>::format(format_args!("{}", 1234)).unwrap_err();
        assert_eq!(err.capacity, 4);
        let ok = AttrBuf::<4>::format(format_args!("{}", 123)).unwrap();
        assert_eq!(ok.len(), 3);
    }
}
