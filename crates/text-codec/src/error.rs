/// Malformed input rejected by a strict decoder.
///
/// Every index is a byte offset into the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside `0-9a-fA-F` where a hex digit was expected
    InvalidHexDigit { index: usize, byte: u8 },
    /// A `%` not followed by two more characters
    TruncatedEscape { index: usize },
    /// A non-ASCII character outside a percent escape
    NonAscii { index: usize },
}

impl DecodeError {
    #[inline]
    pub fn index(&self) -> usize {
        match *self {
            Self::InvalidHexDigit { index, .. }
            | Self::TruncatedEscape { index }
            | Self::NonAscii { index } => index,
        }
    }
}

impl core::fmt::Display for DecodeError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::InvalidHexDigit { index, byte } => {
                write!(f, "invalid hex digit '{}' at index {index}", byte.escape_ascii())
            }
            Self::TruncatedEscape { index } => {
                write!(f, "incomplete percent escape at index {index}")
            }
            Self::NonAscii { index } => {
                write!(f, "non-ASCII character outside an escape at index {index}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
