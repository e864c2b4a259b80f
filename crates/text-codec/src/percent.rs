//! Percent (URL) encoding
//!
//! The unreserved set is ASCII digits, ASCII letters and `-` `_` `.` `*`.
//! Everything else, space included, is written as `%XY`; `+` is never produced for space.

use crate::{
    DecodeError,
    hex::{combine_lossy, hex_to_byte, hex_value, push_byte, table},
};

/// Whether `byte` is emitted literally by [`percent_encode`]
#[inline]
pub const fn is_unreserved(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'-' | b'_' | b'.' | b'*')
}

pub fn percent_encode(bytes: &[u8], upper_case: bool) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let table = table(upper_case);
    let mut output = String::with_capacity(bytes.len());
    for &byte in bytes {
        if is_unreserved(byte) {
            output.push(byte as char);
        } else {
            output.push('%');
            push_byte(&mut output, byte, table);
        }
    }
    output
}

/// Decodes `%XY` escapes and passes ASCII through.
///
/// Fails on a bad hex digit, on a `%` without two following characters, and on
/// non-ASCII characters outside an escape (those must already be escaped).
pub fn percent_decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let input = text.as_bytes();
    let mut output = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let c = input[i];
        if c == b'%' {
            // `i` stays on a char boundary: only ASCII and whole escapes are consumed
            if text[i + 1..].chars().nth(1).is_none() {
                return Err(DecodeError::TruncatedEscape { index: i });
            }
            let (hi, lo) = (input[i + 1], input[i + 2]);
            let Some(byte) = hex_to_byte(hi, lo) else {
                let (index, byte) =
                    if hex_value(hi).is_none() { (i + 1, hi) } else { (i + 2, lo) };
                return Err(DecodeError::InvalidHexDigit { index, byte });
            };
            output.push(byte);
            i += 3;
        } else if c.is_ascii() {
            output.push(c);
            i += 1;
        } else {
            return Err(DecodeError::NonAscii { index: i });
        }
    }
    Ok(output)
}

/// Compatibility decoder over UTF-16 code units.
///
/// Never fails: invalid escape digits go through the `-1` sentinel arithmetic,
/// any other code unit is narrowed to its lowest 8 bits, and a `%` too close to the
/// end to form an escape is copied through together with what follows it.
pub fn percent_decode_lossy(input: &str) -> Vec<u8> {
    let units: Vec<u16> = input.encode_utf16().collect();
    let mut output = Vec::with_capacity(units.len());
    let mut i = 0;

    while i < units.len() {
        let c = units[i];
        if c == b'%' as u16 && i + 2 < units.len() {
            output.push(combine_lossy(units[i + 1], units[i + 2]));
            i += 3;
        } else {
            output.push(c as u8);
            i += 1;
        }
    }
    output
}
