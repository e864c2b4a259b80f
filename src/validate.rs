//! String classifiers
//!
//! Numeric classifiers accept ASCII digits only.

mod cjk;

pub use cjk::{contain_chinese, is_all_chinese, is_chinese};

use regex::Regex;
use std::sync::LazyLock;

macro_rules! static_regex {
    ($($name:ident = $pattern:expr;)*) => {
        $(
            static $name: LazyLock<Regex> = LazyLock::new(|| {
                Regex::new($pattern).expect(concat!("invalid pattern for ", stringify!($name)))
            });
        )*
    };
}

static_regex! {
    PHONE_NUMBER = r"^1[0-9]{10}$";
    SIGNED_NUMBER = r"^[+-]?[0-9]+(\.[0-9]+)?$";
    UNSIGNED_NUMBER = r"^[0-9]+(\.[0-9]+)?$";
    POSITIVE_INTEGER = r"^\+?[0-9]+$";
    IPV4 = concat!(
        r"^(1[0-9]{2}|2[0-4][0-9]|25[0-5]|[1-9][0-9]|[1-9])\.",
        r"(1[0-9]{2}|2[0-4][0-9]|25[0-5]|[1-9][0-9]|[0-9])\.",
        r"(1[0-9]{2}|2[0-4][0-9]|25[0-5]|[1-9][0-9]|[0-9])\.",
        r"(1[0-9]{2}|2[0-4][0-9]|25[0-5]|[1-9][0-9]|[0-9])$",
    );
}

#[inline]
pub fn is_empty_string(s: Option<&str>) -> bool { s.is_none_or(str::is_empty) }

/// Whether the whole of `s` matches `pattern`.
///
/// `None`, an empty string and an invalid pattern all give `false`.
pub fn matches(pattern: &str, s: Option<&str>) -> bool {
    let Some(s) = s.filter(|s| !s.is_empty()) else {
        return false;
    };
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(regex) => regex.is_match(s),
        Err(e) => {
            tracing::warn!("invalid pattern {pattern:?}: {e}");
            false
        }
    }
}

/// `1` followed by ten digits
#[inline]
pub fn is_phone_number(s: &str) -> bool { s.len() == 11 && PHONE_NUMBER.is_match(s) }

#[inline]
pub fn is_signed_number(s: &str) -> bool { !s.is_empty() && SIGNED_NUMBER.is_match(s) }

#[inline]
pub fn is_unsigned_number(s: &str) -> bool { !s.is_empty() && UNSIGNED_NUMBER.is_match(s) }

/// Digits, a point, then exactly `scale` digits
pub fn is_float_number(s: &str, scale: usize) -> bool {
    let bytes = s.as_bytes();
    let Some(point) = bytes.iter().position(|&b| b == b'.') else {
        return false;
    };
    let (integer, fraction) = (&bytes[..point], &bytes[point + 1..]);
    !integer.is_empty()
        && integer.iter().all(u8::is_ascii_digit)
        && fraction.len() == scale
        && fraction.iter().all(u8::is_ascii_digit)
}

/// Non-negative integer with an optional leading `+`
#[inline]
pub fn is_positive_integer_number(s: &str) -> bool {
    !s.is_empty() && POSITIVE_INTEGER.is_match(s)
}

/// Dotted-quad IPv4 address without leading zeros; the first octet is never 0
#[inline]
pub fn is_ipv4(s: &str) -> bool { IPV4.is_match(s) }

/// Whether `s` holds a character outside the BMP.
///
/// Every such character is treated as an emoji. Strings shorter than 4 UTF-16 code
/// units give `false`.
pub fn contain_emoji(s: &str) -> bool {
    if s.encode_utf16().nth(3).is_none() {
        return false;
    }
    s.chars().any(|c| c.len_utf16() == 2)
}
