//! Environment value parsing

use std::path::Path;

/// Keys this crate reads; everything else in a `.env` file is skipped.
pub const KEY_PREFIX: &str = "STRKIT_";

pub trait ParseFromEnv: Sized + 'static {
    /// Parses an already trimmed, non-empty value
    fn parse_value(raw: &str) -> Option<Self>;

    #[inline]
    fn parse_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() { None } else { Self::parse_value(trimmed) }
    }

    #[inline]
    fn parse_from_env(key: &str) -> Option<Self> { Self::parse_str(&::std::env::var(key).ok()?) }
}

impl ParseFromEnv for bool {
    #[inline]
    fn parse_value(raw: &str) -> Option<bool> {
        if raw.eq_ignore_ascii_case("true") || raw == "1" {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
            Some(false)
        } else {
            None
        }
    }
}

impl ParseFromEnv for usize {
    #[inline]
    fn parse_value(raw: &str) -> Option<usize> { raw.parse().ok() }
}

/// `STRKIT_*` entries of a `.env` file.
///
/// The file is only read. Nothing is exported into the process environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DotenvVars(Vec<(String, String)>);

impl DotenvVars {
    /// Reads the nearest `.env` in the current directory or its ancestors.
    pub fn load() -> Self {
        match dotenvy::dotenv_iter() {
            Ok(iter) => Self::collect(iter),
            Err(e) => {
                if !e.not_found() {
                    tracing::warn!("failed to read .env: {e}");
                }
                Self::default()
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> dotenvy::Result<Self> {
        dotenvy::from_path_iter(path).map(Self::collect)
    }

    fn collect(iter: impl IntoIterator<Item = dotenvy::Result<(String, String)>>) -> Self {
        let mut vars = Vec::new();
        for item in iter {
            match item {
                Ok((key, value)) if key.starts_with(KEY_PREFIX) => vars.push((key, value)),
                Ok(_) => {}
                Err(e) => tracing::warn!("skipping .env entry: {e}"),
            }
        }
        Self(vars)
    }

    /// The last value given for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// Parses `key` from the process environment, or from `dotenv` when the process
/// does not set it. Blank and unparsable values give `default`.
#[inline]
pub fn parse_from_env<T: ParseFromEnv>(key: &str, dotenv: &DotenvVars, default: T) -> T {
    match ::std::env::var(key) {
        Ok(value) => T::parse_str(&value),
        Err(_) => dotenv.get(key).and_then(T::parse_str),
    }
    .unwrap_or(default)
}
