//! Base16 and percent (URL) encoding
//!
//! Every codec works on raw byte sequences and comes with an exact inverse.
//! Decoders exist in two flavours:
//!
//! - strict (`base16_decode`, `percent_decode`): malformed input is reported as a [`DecodeError`]
//! - lossy (`base16_decode_lossy`, `percent_decode_lossy`): never fails, invalid digits are
//!   folded into the output through the `-1` sentinel arithmetic and non-escaped code units
//!   are narrowed to 8 bits
//!
//! # Example
//!
//! ```
//! use text_codec::{base16_decode, base16_encode, percent_decode, percent_encode};
//!
//! assert_eq!(base16_encode(b"0.5", true), "302E35");
//! assert_eq!(base16_decode("302e35").unwrap(), b"0.5");
//!
//! let encoded = percent_encode("welcome to 中国".as_bytes(), true);
//! assert_eq!(encoded, "welcome%20to%20%E4%B8%AD%E5%9B%BD");
//! assert_eq!(percent_decode(&encoded).unwrap(), "welcome to 中国".as_bytes());
//! ```

mod base16;
mod error;
mod hex;
mod percent;

// Public API
pub use base16::{base16_decode, base16_decode_lossy, base16_encode, encoded_len};
pub use error::DecodeError;
pub use hex::{LOWER_HEX_CHARS, UPPER_HEX_CHARS, hex2dec, hex_to_byte, hex_value};
pub use percent::{is_unreserved, percent_decode, percent_decode_lossy, percent_encode};
