//! Counting and truncating text by user-perceived characters
//!
//! The count agrees with MySQL's `CHAR_LENGTH()` under utf8mb4 for ordinary text, with
//! two deliberate differences for emoji:
//!
//! - a code point outside the BMP (a surrogate pair in UTF-16) is one character
//! - a ZERO WIDTH JOINER swallows itself and the next two code units, so a joined
//!   sequence such as 👨‍👩‍👦 counts as one
//!
//! This is an approximation, not Unicode grapheme segmentation: flags, skin-tone
//! modifiers and variation selectors are counted unit by unit.

/// U+200D
pub const ZERO_WIDTH_JOINER: u16 = 0x200D;

#[inline(always)]
const fn is_high_surrogate(unit: u16) -> bool { matches!(unit, 0xD800..=0xDBFF) }

/// Code units consumed by the step starting at `unit`, and whether that step is counted
#[inline(always)]
const fn step(unit: u16) -> (usize, bool) {
    if unit == ZERO_WIDTH_JOINER {
        (3, false)
    } else if is_high_surrogate(unit) {
        (2, true)
    } else {
        (1, true)
    }
}

/// Number of perceived characters in a UTF-16 sequence
pub fn count_utf16(units: &[u16]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < units.len() {
        let (width, counted) = step(units[i]);
        i += width;
        count += counted as usize;
    }
    count
}

/// Code-unit length of the longest prefix holding at most `max_count` characters.
///
/// Never larger than `units.len()`.
fn prefix_len<I>(units: I, len: usize, max_count: usize) -> usize
where
    I: IntoIterator<Item = u16>,
{
    let mut units = units.into_iter();
    let mut count = 0;
    let mut i = 0;
    while i < len && count < max_count {
        let Some(unit) = units.next() else { break };
        let (width, counted) = step(unit);
        if width > 1 {
            units.nth(width - 2);
        }
        i += width;
        count += counted as usize;
    }
    i.min(len)
}

/// Prefix of `units` holding at most `max_count` perceived characters.
///
/// Input shorter than two code units is returned whole. The cut never lands inside
/// a surrogate pair or a ZWJ triple of well-formed input.
pub fn truncate_utf16(units: &[u16], max_count: usize) -> &[u16] {
    if units.len() < 2 {
        return units;
    }
    &units[..prefix_len(units.iter().copied(), units.len(), max_count)]
}

/// Number of perceived characters in `text`
pub fn unicode_count(text: &str) -> usize {
    let mut units = text.encode_utf16();
    let mut count = 0;
    while let Some(unit) = units.next() {
        let (width, counted) = step(unit);
        if width > 1 {
            units.nth(width - 2);
        }
        count += counted as usize;
    }
    count
}

/// Prefix of `text` holding at most `max_count` perceived characters.
///
/// Behaves like [`truncate_utf16`] on the UTF-16 form of `text`; the cut is mapped
/// back to the nearest char boundary at or before it.
pub fn truncate_by_unicode_count(text: &str, max_count: usize) -> &str {
    let len = text.encode_utf16().count();
    if len < 2 {
        return text;
    }
    let cut = prefix_len(text.encode_utf16(), len, max_count);
    &text[..byte_offset(text, cut)]
}

/// Byte offset of the last char boundary at or before UTF-16 offset `units`
fn byte_offset(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (offset, ch) in text.char_indices() {
        seen += ch.len_utf16();
        if seen > units {
            return offset;
        }
    }
    text.len()
}

/// Method syntax for the counting functions
pub trait UnicodeCount {
    fn unicode_count(&self) -> usize;
    fn truncate_by_unicode_count(&self, max_count: usize) -> &Self;
}

impl UnicodeCount for str {
    #[inline]
    fn unicode_count(&self) -> usize { unicode_count(self) }

    #[inline]
    fn truncate_by_unicode_count(&self, max_count: usize) -> &str {
        truncate_by_unicode_count(self, max_count)
    }
}

impl UnicodeCount for [u16] {
    #[inline]
    fn unicode_count(&self) -> usize { count_utf16(self) }

    #[inline]
    fn truncate_by_unicode_count(&self, max_count: usize) -> &[u16] {
        truncate_utf16(self, max_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> { s.encode_utf16().collect() }

    #[test]
    fn test_count() {
        let cases = [
            ("", 0),
            ("給點陽光我就腐爛", 8),
            ("😀😀😀😂😂", 5),
            ("中国🍥🍭🎂🌶🌽你好", 9),
            ("🔥🍉haha", 6),
            ("中国", 2),
            ("0.5", 3),
            ("こんにちは💯", 6),
            ("👨\u{200D}👩\u{200D}👦", 1),
            ("👪", 1),
        ];
        for (text, expected) in cases {
            assert_eq!(unicode_count(text), expected, "{text}");
            assert_eq!(count_utf16(&utf16(text)), expected, "{text}");
            assert_eq!(text.unicode_count(), expected);
        }
    }

    #[test]
    fn test_truncate() {
        let cases = [
            ("給點陽光我就腐爛", 2, "給點"),
            ("😀😀😀😂😂", 3, "😀😀😀"),
            ("🔥🍉haha", 1, "🔥"),
            ("welcome to 中国", 12, "welcome to 中"),
            ("0.5", 2, "0."),
            ("こんにちは💯", 5, "こんにちは"),
            ("こんにちは💯", 32, "こんにちは💯"),
            // the limit is checked before a joiner gets the chance to extend the unit
            ("👨\u{200D}👩\u{200D}👦x", 1, "👨"),
            ("👨\u{200D}👩\u{200D}👦x", 2, "👨\u{200D}👩\u{200D}👦x"),
        ];
        for (text, max, expected) in cases {
            assert_eq!(truncate_by_unicode_count(text, max), expected);
            assert_eq!(truncate_utf16(&utf16(text), max), utf16(expected).as_slice());
        }
    }

    #[test]
    fn test_truncate_zero() {
        assert_eq!(truncate_by_unicode_count("中国", 0), "");
        assert!(truncate_utf16(&utf16("中国"), 0).is_empty());
    }

    #[test]
    fn test_truncate_short_input_is_identity() {
        assert_eq!(truncate_by_unicode_count("", 0), "");
        assert_eq!(truncate_by_unicode_count("a", 0), "a");
        assert_eq!(truncate_utf16(&utf16("a"), 0), utf16("a").as_slice());
    }

    #[test]
    fn test_truncate_clamps_trailing_joiner() {
        // ZWJ at the end would push the cursor past the input
        let text = "ab\u{200D}";
        assert_eq!(truncate_by_unicode_count(text, 10), text);
        assert_eq!(truncate_utf16(&utf16(text), 10), utf16(text).as_slice());
        assert_eq!(unicode_count(text), 2);
    }

    #[test]
    fn test_joiner_before_bmp_char() {
        // the joiner consumes 'b' and the high half of 😀, the low half counts alone
        let text = "a\u{200D}b😀c";
        assert_eq!(count_utf16(&utf16(text)), 3);
        assert_eq!(unicode_count(text), 3);
        assert_eq!(truncate_utf16(&utf16(text), 1).len(), 1);
        assert_eq!(truncate_utf16(&utf16(text), 2).len(), 5);
        assert_eq!(truncate_by_unicode_count(text, 2), "a\u{200D}b😀");
    }

    #[test]
    fn test_truncate_is_prefix_and_idempotent() {
        let texts = [
            "給點陽光我就腐爛",
            "😀😀😀😂😂",
            "中国🍥🍭🎂🌶🌽你好",
            "a\u{200D}b😀c",
            "👨\u{200D}👩\u{200D}👦👪",
        ];
        for text in texts {
            for n in 0..12 {
                let once = truncate_by_unicode_count(text, n);
                assert!(text.starts_with(once));
                assert!(unicode_count(once) <= n);
                assert_eq!(truncate_by_unicode_count(once, n), once);
            }
        }
    }

    #[test]
    fn test_slice_trait() {
        let units = utf16("😀😀😀😂😂");
        assert_eq!(units.unicode_count(), 5);
        assert_eq!(units.truncate_by_unicode_count(1).len(), 2);
        assert_eq!("給點陽光".truncate_by_unicode_count(3), "給點陽");
    }
}
