mod env;

pub use env::{DotenvVars, KEY_PREFIX, ParseFromEnv, parse_from_env};

use std::sync::LazyLock;

pub const DEFAULT_UNZIP_BUFFER_SIZE: usize = 2048;
pub const DEFAULT_EXEC_BUFFER_SIZE: usize = 1024;

/// Settings for the filesystem and process helpers.
///
/// The codecs and the Unicode counter never consult it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Copy buffer used when writing extracted zip entries, `STRKIT_UNZIP_BUFFER_SIZE`
    pub unzip_buffer_size: usize,
    /// Read buffer for a child's stdout, `STRKIT_EXEC_BUFFER_SIZE`
    pub exec_buffer_size: usize,
    /// Whether extraction replaces existing file content, `STRKIT_UNZIP_OVERWRITE`
    pub unzip_overwrite: bool,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            unzip_buffer_size: DEFAULT_UNZIP_BUFFER_SIZE,
            exec_buffer_size: DEFAULT_EXEC_BUFFER_SIZE,
            unzip_overwrite: true,
        }
    }
}

impl Config {
    /// Reads `STRKIT_*` keys from the process environment, falling back to the
    /// nearest `.env` file.
    ///
    /// The `.env` file is read without being exported, so the host process
    /// environment is left as it was.
    pub fn from_env() -> Self { Self::from_sources(&DotenvVars::load()) }

    pub fn from_sources(dotenv: &DotenvVars) -> Self {
        let config = Self {
            unzip_buffer_size: non_zero_or(
                parse_from_env("STRKIT_UNZIP_BUFFER_SIZE", dotenv, DEFAULT_UNZIP_BUFFER_SIZE),
                DEFAULT_UNZIP_BUFFER_SIZE,
            ),
            exec_buffer_size: non_zero_or(
                parse_from_env("STRKIT_EXEC_BUFFER_SIZE", dotenv, DEFAULT_EXEC_BUFFER_SIZE),
                DEFAULT_EXEC_BUFFER_SIZE,
            ),
            unzip_overwrite: parse_from_env("STRKIT_UNZIP_OVERWRITE", dotenv, true),
        };
        tracing::debug!(?config, "configuration loaded");
        config
    }
}

#[inline]
const fn non_zero_or(value: usize, default: usize) -> usize {
    if value == 0 { default } else { value }
}

static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

/// Process-wide configuration, read once on first use
#[inline]
pub fn get() -> &'static Config { &CONFIG }
