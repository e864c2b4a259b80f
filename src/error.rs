use std::{io, path::PathBuf};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// The path exists but is a directory or something else that is not a regular file
    NotAFile(PathBuf),
    Zip(zip::result::ZipError),
    /// A zip entry whose name would resolve outside the destination directory
    UnsafeEntryName(String),
    Url(url::ParseError),
}

impl Error {
    #[inline]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::NotAFile(_) => "not_a_file",
            Self::Zip(_) => "zip",
            Self::UnsafeEntryName(_) => "unsafe_entry_name",
            Self::Url(_) => "url",
        }
    }
}

impl core::fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::NotAFile(path) => write!(f, "{} already exists, but not file", path.display()),
            Self::Zip(e) => write!(f, "Zip archive error: {e}"),
            Self::UnsafeEntryName(name) => {
                write!(f, "Zip entry '{name}' escapes the destination directory")
            }
            Self::Url(e) => write!(f, "Invalid URL: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Zip(e) => Some(e),
            Self::Url(e) => Some(e),
            Self::NotAFile(_) | Self::UnsafeEntryName(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(e: io::Error) -> Self { Self::Io(e) }
}

impl From<zip::result::ZipError> for Error {
    #[inline]
    fn from(e: zip::result::ZipError) -> Self { Self::Zip(e) }
}

impl From<url::ParseError> for Error {
    #[inline]
    fn from(e: url::ParseError) -> Self { Self::Url(e) }
}
