//! String utilities
//!
//! - [`unicode`]: counting and truncating text by user-perceived characters
//! - codecs re-exported from `text_codec`: base16 and percent encoding
//! - [`validate`]: phone number, numeric, IPv4, emoji and Chinese-script classifiers
//! - [`fmt`], [`query`]: small formatting helpers
//! - [`fs`], [`process`]: `mkdir -p`, `touch`, `unzip` and first-line command output
//!
//! ```
//! use strkit::{UnicodeCount as _, base16_encode};
//!
//! assert_eq!("👨\u{200D}👩\u{200D}👦".unicode_count(), 1);
//! assert_eq!("給點陽光我就腐爛".truncate_by_unicode_count(2), "給點");
//! assert_eq!(base16_encode(b"0.5", true), "302E35");
//! ```

pub mod config;
mod error;
pub mod fmt;
pub mod fs;
pub mod process;
pub mod query;
pub mod unicode;
pub mod validate;

pub use error::{Error, Result};
pub use fmt::{ToFixed2, format_clock};
pub use query::append_query_params;
pub use text_codec::{
    DecodeError, base16_decode, base16_decode_lossy, base16_encode, percent_decode,
    percent_decode_lossy, percent_encode,
};
pub use unicode::{UnicodeCount, truncate_by_unicode_count, unicode_count};
