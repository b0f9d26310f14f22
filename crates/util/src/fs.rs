//! Whole-file read/write helpers.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub fn path(&self) -> &Path {
        match self {
            FsError::Read { path, .. } | FsError::Write { path, .. } => path,
        }
    }
}

fn read_err(path: &Path) -> impl FnOnce(io::Error) -> FsError + '_ {
    move |source| FsError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn write_err(path: &Path) -> impl FnOnce(io::Error) -> FsError + '_ {
    move |source| FsError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads a whole UTF-8 text file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, FsError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(read_err(path))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read text file");
    Ok(text)
}

/// Writes `text`, replacing the file if it exists.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<(), FsError> {
    write_binary(path, text.as_bytes())
}

/// Appends `text`, creating the file if needed.
pub fn append_text(path: impl AsRef<Path>, text: &str) -> Result<(), FsError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err(path))?;
    file.write_all(text.as_bytes()).map_err(write_err(path))?;
    Ok(())
}

/// Reads a whole file as bytes.
pub fn read_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, FsError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(read_err(path))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read binary file");
    Ok(bytes)
}

/// Writes `bytes`, replacing the file if it exists.
pub fn write_binary(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), FsError> {
    let path = path.as_ref();
    fs::write(path, bytes).map_err(write_err(path))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_roundtrip_and_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        write_text(&path, "{\n").unwrap();
        append_text(&path, "}").unwrap();
        assert_eq!(read_text(&path).unwrap(), "{\n}");
    }

    #[test]
    fn test_binary_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        let data: Vec<u8> = (0..=255).collect();
        write_binary(&path, &data).unwrap();
        assert_eq!(read_binary(&path).unwrap(), data);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, FsError::Read { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("missing.txt"));
    }
}
