use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failures while loading or saving the target file.
///
/// Read and encoding failures are distinct variants so a malformed-UTF-8 file
/// is reported as such rather than as a generic I/O error.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the whole file into memory as UTF-8.
///
/// The handle is closed before this returns, so the later write never races
/// an open reader in the same process.
pub fn load(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| SourceError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite the file with `content`.
///
/// Line endings in `content` are written through untouched.
pub fn save(path: &Path, content: &str) -> Result<(), SourceError> {
    atomic_write(path, content.as_bytes()).map_err(|source| SourceError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Atomic file write: tempfile + fsync + rename.
///
/// The tempfile lives in the target's directory so the rename stays on one
/// filesystem. Either the full write lands or the original file is untouched.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
