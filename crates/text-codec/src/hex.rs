//! Hex digit tables shared by base16 and percent encoding

/// Decode lookup table: ASCII byte to 0-15, or 0xFF when invalid
pub(crate) const HEX_TABLE: &[u8; 256] = &{
    let mut buf = [0xFF; 256];
    let mut i: u8 = 0;
    loop {
        buf[i as usize] = match i {
            b'0'..=b'9' => i - b'0',
            b'a'..=b'f' => i - b'a' + 10,
            b'A'..=b'F' => i - b'A' + 10,
            _ => 0xFF,
        };
        if i == 255 {
            break buf;
        }
        i += 1;
    }
};

/// Uppercase encode table
pub static UPPER_HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";

/// Lowercase encode table
pub static LOWER_HEX_CHARS: [u8; 16] = *b"0123456789abcdef";

#[inline(always)]
pub(crate) fn table(upper_case: bool) -> &'static [u8; 16] {
    if upper_case { &UPPER_HEX_CHARS } else { &LOWER_HEX_CHARS }
}

/// Appends the two hex digits of `byte`, high nibble first
#[inline(always)]
pub(crate) fn push_byte(out: &mut String, byte: u8, table: &[u8; 16]) {
    out.push(table[(byte >> 4) as usize] as char);
    out.push(table[(byte & 0x0F) as usize] as char);
}

/// Nibble value of an ASCII hex digit
#[inline(always)]
pub const fn hex_value(c: u8) -> Option<u8> {
    match HEX_TABLE[c as usize] {
        0xFF => None,
        v => Some(v),
    }
}

/// Decodes two hex characters into one byte
#[inline(always)]
pub const fn hex_to_byte(hi: u8, lo: u8) -> Option<u8> {
    let high = HEX_TABLE[hi as usize];
    if high == 0xFF {
        return None;
    }
    let low = HEX_TABLE[lo as usize];
    if low == 0xFF {
        return None;
    }
    Some((high << 4) | low)
}

/// Nibble value of a UTF-16 code unit, `-1` for anything that is not a hex digit.
///
/// The sentinel takes part in the lossy decoders' arithmetic as is.
#[inline]
pub const fn hex2dec(unit: u16) -> i32 {
    if unit > 0x7F {
        return -1;
    }
    match HEX_TABLE[unit as usize] {
        0xFF => -1,
        v => v as i32,
    }
}

/// `(hi << 4) + lo` truncated to a byte, sentinels included
#[inline(always)]
pub(crate) const fn combine_lossy(hi: u16, lo: u16) -> u8 {
    ((hex2dec(hi) << 4) + hex2dec(lo)) as u8
}
