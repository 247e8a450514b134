//! Banner file output.

use super::error::WriteError;
use super::Banner;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write the banner to `output_directory/filename`, creating the directory
/// (and its parents) when missing.
///
/// The bytes go to a temporary file in the same directory which then
/// replaces the target, so the target is never left half-written.
pub fn write(
    output_directory: &Path,
    filename: &str,
    banner: &Banner,
) -> Result<PathBuf, WriteError> {
    if !output_directory.is_dir() {
        debug!("Creating output directory {}", output_directory.display());
        fs::create_dir_all(output_directory).map_err(|source| WriteError::CreateDirectory {
            path: output_directory.to_path_buf(),
            source,
        })?;
    }

    let target = output_directory.join(filename);
    debug!("Writing banner to file {}", target.display());

    let write_err = |source| WriteError::Write {
        path: target.clone(),
        source,
    };

    let mut file = temp_file_in(output_directory).map_err(write_err)?;
    file.write_all(banner.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(&target).map_err(|e| write_err(e.error))?;

    Ok(target)
}

#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // Match what a plain create would give instead of tempfile's 0600.
    tempfile::Builder::new()
        .prefix(".banner")
        .permissions(fs::Permissions::from_mode(0o644))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    tempfile::Builder::new().prefix(".banner").tempfile_in(dir)
}
