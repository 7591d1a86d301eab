// CLASSIFICATION: COMMUNITY
// Filename: num.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Lenient integer parsing for kernel command line values.
//!
//! Boot parameters are typed by humans and never validated upstream, so these
//! helpers take the longest numeric prefix instead of rejecting the token.

#![forbid(unsafe_code)]

/// Parse an unsigned integer with C-style base detection.
///
/// `0x`/`0X` selects hexadecimal, a leading `0` octal, anything else decimal.
/// Leading whitespace and a sign are accepted; a `-` negates modulo 2^64.
/// Parsing stops at the first invalid digit, a value with no digits yields
/// `0`, and overflow saturates at `u64::MAX`.
///
/// ```
/// use cohesix_resume::utils::num::parse_auto_base;
///
/// assert_eq!(parse_auto_base("0x1A"), 26);
/// assert_eq!(parse_auto_base("017"), 15);
/// assert_eq!(parse_auto_base("42k"), 42);
/// assert_eq!(parse_auto_base("abc"), 0);
/// ```
pub fn parse_auto_base(s: &str) -> u64 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let bytes = s.as_bytes();
    let (radix, digits) = match bytes {
        [b'0', b'x' | b'X', d, ..] if d.is_ascii_hexdigit() => (16, &s[2..]),
        [b'0', ..] => (8, s),
        _ => (10, s),
    };

    let mut value: u64 = 0;
    let mut overflow = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        match value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(d)))
        {
            Some(v) => value = v,
            None => overflow = true,
        }
    }

    if overflow {
        u64::MAX
    } else if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Parse an optionally signed run of decimal digits at the start of `s`.
///
/// Bytes after the digits are ignored, whatever they are. A `-` negates
/// modulo 2^64, as [`parse_auto_base`] does. Returns `None` when no digit
/// follows the optional sign or the digits do not fit in a `u64`.
pub fn parse_decimal_prefix(s: &[u8]) -> Option<u64> {
    let (negative, rest) = match s.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, s),
    };
    let end = rest
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let mut value: u64 = 0;
    for &b in &rest[..end] {
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(b - b'0'))?;
    }
    Some(if negative { value.wrapping_neg() } else { value })
}
