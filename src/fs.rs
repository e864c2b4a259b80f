//! Idempotent `mkdir -p`, `touch` and `unzip`

use crate::{Error, Result, config};
use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};
use zip::ZipArchive;

/// Creates `path` and any missing parents; succeeds if the directory already exists.
///
/// Fails when `path`, or one of its ancestors, exists and is not a directory.
pub fn mkdir_p<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)?;
    tracing::debug!("created directory {}", path.display());
    Ok(())
}

/// Creates an empty file, parents first; succeeds if the file already exists.
pub fn touch<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Ok(metadata) = fs::metadata(path) {
        return if metadata.is_file() { Ok(()) } else { Err(Error::NotAFile(path.to_path_buf())) };
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        mkdir_p(parent)?;
    }
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            tracing::debug!("created file {}", path.display());
            Ok(())
        }
        // lost a race against another creator
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_file() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Extracts `archive` into `dest` and returns `dest`.
///
/// Directory entries become directories, replacing a plain file of the same name.
/// For file entries the parents and an empty file are created first, then
/// `write_entry` receives the entry's content and the destination path.
pub fn unzip<F>(
    archive: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    mut write_entry: F,
) -> Result<PathBuf>
where
    F: FnMut(&mut dyn Read, &Path) -> io::Result<()>,
{
    let dest = dest.as_ref();
    mkdir_p(dest)?;

    let mut archive = ZipArchive::new(File::open(archive)?)?;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::UnsafeEntryName(entry.name().to_owned()));
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            if target.is_file() {
                fs::remove_file(&target)?;
            }
            mkdir_p(&target)?;
            continue;
        }

        touch(&target)?;
        tracing::debug!("extracting {} ({} bytes)", entry.name(), entry.size());
        write_entry(&mut entry, &target)?;
    }
    Ok(dest.to_path_buf())
}

/// [`unzip`] writing every entry to its destination file.
///
/// Uses the configured copy buffer; existing files are truncated first when
/// overwriting is enabled and left untouched otherwise.
pub fn unzip_to_dir(archive: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<PathBuf> {
    let config = config::get();
    let (buffer_size, overwrite) = (config.unzip_buffer_size, config.unzip_overwrite);
    unzip(archive, dest, |reader, target| copy_entry(reader, target, buffer_size, overwrite))
}

fn copy_entry(
    reader: &mut dyn Read,
    target: &Path,
    buffer_size: usize,
    overwrite: bool,
) -> io::Result<()> {
    if !overwrite && fs::metadata(target)?.len() > 0 {
        tracing::debug!("keeping existing {}", target.display());
        return Ok(());
    }
    let mut file = File::create(target)?;
    let mut reader = BufReader::with_capacity(buffer_size, reader);
    io::copy(&mut reader, &mut file)?;
    Ok(())
}
