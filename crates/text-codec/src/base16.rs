//! Base16 (hex) encoding

use crate::{
    DecodeError,
    hex::{HEX_TABLE, combine_lossy, push_byte, table},
};

/// Exact length of the base16 encoding of `input_len` bytes
#[inline]
pub const fn encoded_len(input_len: usize) -> usize { input_len << 1 }

/// Encodes every byte as two hex digits, high nibble first.
#[inline]
pub fn base16_encode(bytes: &[u8], upper_case: bool) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let table = table(upper_case);
    let mut output = String::with_capacity(encoded_len(bytes.len()));
    for &byte in bytes {
        push_byte(&mut output, byte, table);
    }
    output
}

/// Decodes pairs of hex digits, accepting either case.
///
/// Pairs are counted in UTF-16 code units, as in [`base16_decode_lossy`]. A trailing
/// odd character is ignored whatever it is. Any other non-digit is rejected.
pub fn base16_decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let half_len = input.encode_utf16().count() >> 1;
    // a UTF-8 string is never shorter in bytes than in UTF-16 code units, and the
    // prefix is all ASCII up to the first rejected byte
    let input = &input.as_bytes()[..half_len << 1];
    let mut output = Vec::with_capacity(half_len);

    for (i, pair) in input.chunks_exact(2).enumerate() {
        let j = i << 1;
        let high = nibble(pair[0], j)?;
        let low = nibble(pair[1], j + 1)?;
        output.push((high << 4) | low);
    }
    Ok(output)
}

/// Compatibility decoder over UTF-16 code units.
///
/// Output length is half the code-unit length. Characters that are not hex digits
/// count as `-1` and the sum `(hi << 4) + lo` is truncated to a byte, so malformed
/// input yields garbage bytes instead of an error.
pub fn base16_decode_lossy(input: &str) -> Vec<u8> {
    let units: Vec<u16> = input.encode_utf16().collect();
    units.chunks_exact(2).map(|pair| combine_lossy(pair[0], pair[1])).collect()
}

#[inline(always)]
fn nibble(byte: u8, index: usize) -> Result<u8, DecodeError> {
    match HEX_TABLE[byte as usize] {
        0xFF => Err(DecodeError::InvalidHexDigit { index, byte }),
        v => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: [(&str, &str); 7] = [
        ("0", "30"),
        ("0.5", "302E35"),
        ("給點陽光我就腐爛", "E7B5A6E9BB9EE999BDE58589E68891E5B0B1E88590E7889B"),
        ("😀😀😀😂😂", "F09F9880F09F9880F09F9880F09F9882F09F9882"),
        ("🔥🍉haha", "F09F94A5F09F8D8968616861"),
        ("welcome to 中国", "77656C636F6D6520746F20E4B8ADE59BBD"),
        ("こんにちは💯", "E38193E38293E381ABE381A1E381AFF09F92AF"),
    ];

    #[test]
    fn test_encode() {
        for (text, expected) in FIXTURES {
            assert_eq!(base16_encode(text.as_bytes(), true), expected);
            assert_eq!(base16_encode(text.as_bytes(), false), expected.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_decode() {
        for (text, encoded) in FIXTURES {
            assert_eq!(base16_decode(encoded).unwrap(), text.as_bytes());
            assert_eq!(base16_decode(&encoded.to_ascii_lowercase()).unwrap(), text.as_bytes());
            assert_eq!(base16_decode_lossy(encoded), text.as_bytes());
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(base16_encode(b"", true), "");
        assert!(base16_decode("").unwrap().is_empty());
        assert!(base16_decode_lossy("").is_empty());
    }

    #[test]
    fn test_length_law() {
        let bytes: Vec<u8> = (0..=255).collect();
        for n in [0, 1, 2, 17, 256] {
            assert_eq!(base16_encode(&bytes[..n], true).len(), encoded_len(n));
        }
    }

    #[test]
    fn test_all_bytes_round_trip() {
        let bytes: Vec<u8> = (0..=255).collect();
        for upper in [true, false] {
            let encoded = base16_encode(&bytes, upper);
            assert_eq!(base16_decode(&encoded).unwrap(), bytes);
            assert_eq!(base16_decode_lossy(&encoded), bytes);
        }
    }

    #[test]
    fn test_odd_length_ignores_trailing() {
        assert_eq!(base16_decode("302E3").unwrap(), b"0.");
        assert_eq!(base16_decode("3").unwrap(), b"");
        assert_eq!(base16_decode_lossy("302E3"), b"0.");
        // trailing character is never inspected
        assert_eq!(base16_decode("30z").unwrap(), b"0");
        assert_eq!(base16_decode("30中").unwrap(), b"0");
        assert_eq!(base16_decode("30é").unwrap(), b"0");
        assert_eq!(base16_decode_lossy("30中"), b"0");
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            base16_decode("30g5").unwrap_err(),
            DecodeError::InvalidHexDigit { index: 2, byte: b'g' }
        );
        assert_eq!(base16_decode("3 ").unwrap_err().index(), 1);
        assert_eq!(
            base16_decode("中国").unwrap_err(),
            DecodeError::InvalidHexDigit { index: 0, byte: 0xE4 }
        );
        // four code units, so the supplementary character is inside a pair
        assert_eq!(
            base16_decode("30😀").unwrap_err(),
            DecodeError::InvalidHexDigit { index: 2, byte: 0xF0 }
        );
    }

    #[test]
    fn test_lossy_sentinel() {
        assert_eq!(base16_decode_lossy("g0"), [0xF0]);
        assert_eq!(base16_decode_lossy("0g"), [0xFF]);
        assert_eq!(base16_decode_lossy("zz30"), [0xEF, 0x30]);
        // length follows UTF-16 code units, not bytes
        assert_eq!(base16_decode_lossy("中国").len(), 1);
    }
}
