/// Blocks treated as Chinese script, punctuation included
const CHINESE_BLOCKS: [(char, char); 6] = [
    // CJK Unified Ideographs
    ('\u{4E00}', '\u{9FFF}'),
    // CJK Compatibility Ideographs
    ('\u{F900}', '\u{FAFF}'),
    // CJK Unified Ideographs Extension A
    ('\u{3400}', '\u{4DBF}'),
    // General Punctuation
    ('\u{2000}', '\u{206F}'),
    // CJK Symbols and Punctuation
    ('\u{3000}', '\u{303F}'),
    // Halfwidth and Fullwidth Forms
    ('\u{FF00}', '\u{FFEF}'),
];

#[inline]
pub fn is_chinese(c: char) -> bool {
    CHINESE_BLOCKS.iter().any(|&(start, end)| (start..=end).contains(&c))
}

#[inline]
fn at_least_two_units(s: &str) -> bool { s.encode_utf16().nth(1).is_some() }

/// Every character is Chinese; strings shorter than 2 UTF-16 code units give `false`
pub fn is_all_chinese(s: &str) -> bool { at_least_two_units(s) && s.chars().all(is_chinese) }

/// Some character is Chinese; strings shorter than 2 UTF-16 code units give `false`
pub fn contain_chinese(s: &str) -> bool { at_least_two_units(s) && s.chars().any(is_chinese) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_all_chinese() {
        for s in ["給點陽光我就腐爛", "中国", "，。"] {
            assert!(is_all_chinese(s), "{s}");
        }
        for s in [
            ",.=_",
            "中国🍥🍭🎂🌶🌽你好",
            "😀😀😀😂😂",
            "こんにちは",
            "こんにちは💯",
            "안녕하세요",
            "안녕하세요.",
            "ゞ給點陽光我就腐爛ゞ",
            "1.d.2.5😎",
            "🔥🍉haha",
            "0.5",
            "abcdefghikklmn",
            "中",
        ] {
            assert!(!is_all_chinese(s), "{s}");
        }
    }

    #[test]
    fn test_contain_chinese() {
        for s in [
            "給點陽光我就腐爛",
            "ゞ給點陽光我就腐爛ゞ",
            "中国",
            "welcome to 中国",
            "中国🍥🍭🎂🌶🌽你好",
            "，。",
            ",.=_，。",
        ] {
            assert!(contain_chinese(s), "{s}");
        }
        for s in [
            ",.=_",
            "😀😀😀😂😂",
            "こんにちは",
            "こんにちは💯",
            "안녕하세요",
            "안녕하세요.",
            "1.d.2.5😎",
            "🔥🍉haha",
            "0.5",
            "abcdefghikklmn",
        ] {
            assert!(!contain_chinese(s), "{s}");
        }
    }

    #[test]
    fn test_is_chinese() {
        assert!(is_chinese('中'));
        assert!(is_chinese('。'));
        assert!(is_chinese('，'));
        assert!(is_chinese('\u{2026}'));
        assert!(!is_chinese('ゞ'));
        assert!(!is_chinese('a'));
        assert!(!is_chinese('😀'));
    }
}
