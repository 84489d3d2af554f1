use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Target container not found: {0}")]
    TargetNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read markdown source text from a file
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Fill a target file with rendered output.
///
/// The target's directory must already exist. With `clear_before` any
/// previous content is replaced; otherwise `html` is appended.
pub fn populate(target: &Path, html: &str, clear_before: bool) -> Result<(), IoError> {
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() || target.is_dir() {
        return Err(IoError::TargetNotFound(target.to_path_buf()));
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(clear_before)
        .append(!clear_before)
        .open(target)?;
    file.write_all(html.as_bytes())?;
    log::debug!(
        "wrote {} bytes to {} (clear_before: {clear_before})",
        html.len(),
        target.display()
    );
    Ok(())
}
