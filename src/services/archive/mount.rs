use super::extract::{extract_zip, single_wrapper_dir};
use super::types::ArchiveFormat;
use crate::types::errors::{ConvertError, ConvertResult};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Readable view of an archive's contents, released on drop.
#[derive(Debug)]
pub struct MountedArchive {
    source: PathBuf,
    root: PathBuf,
    release: Release,
}

#[derive(Debug)]
enum Release {
    /// Disk image attached onto a temporary mount point.
    Detach { mount_point: TempDir, hdiutil: PathBuf },
    /// Extracted copy, deleted with the temporary directory.
    Remove { _dir: TempDir },
    /// Caller-owned directory; nothing to release.
    Keep,
}

impl MountedArchive {
    /// Directory holding the archive's top-level contents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Expose `archive` as a directory tree for as long as the returned guard lives.
///
/// Disk images are attached read-only with the `hdiutil` program; a spawn
/// failure or non-zero exit is a mount error. Zip files are extracted into a
/// temporary directory. Directories are used in place.
pub fn mount(archive: &Path, hdiutil: &Path) -> ConvertResult<MountedArchive> {
    let format = ArchiveFormat::from_path(archive).ok_or_else(|| {
        ConvertError::Archive(format!("Unsupported archive format: {}", archive.display()))
    })?;

    match format {
        ArchiveFormat::DiskImage => attach_disk_image(archive, hdiutil),
        ArchiveFormat::Zip => extract_to_temp(archive),
        ArchiveFormat::Directory => Ok(MountedArchive {
            source: archive.to_path_buf(),
            root: archive.to_path_buf(),
            release: Release::Keep,
        }),
    }
}

fn attach_disk_image(image: &Path, hdiutil: &Path) -> ConvertResult<MountedArchive> {
    let mount_point = tempfile::Builder::new().prefix("locdb-mount-").tempdir()?;
    log::info!(
        "Mounting {} onto {}...",
        image.display(),
        mount_point.path().display()
    );

    let status = Command::new(hdiutil)
        .args([
            "attach",
            "-readonly",
            "-noverify",
            "-noautoopen",
            "-nobrowse",
            "-quiet",
            "-mountpoint",
        ])
        .arg(mount_point.path())
        .arg(image)
        .status()
        .map_err(|e| ConvertError::mount(image, format!("failed to run {}: {e}", hdiutil.display())))?;

    if !status.success() {
        return Err(ConvertError::mount(
            image,
            format!("{} attach exited with {status}", hdiutil.display()),
        ));
    }
    log::info!(
        "Mounting {} onto {} done.",
        image.display(),
        mount_point.path().display()
    );

    Ok(MountedArchive {
        source: image.to_path_buf(),
        root: mount_point.path().to_path_buf(),
        release: Release::Detach {
            mount_point,
            hdiutil: hdiutil.to_path_buf(),
        },
    })
}

fn extract_to_temp(archive: &Path) -> ConvertResult<MountedArchive> {
    let dest = tempfile::Builder::new().prefix("locdb-extract-").tempdir()?;
    let count = extract_zip(archive, dest.path())?;
    log::info!(
        "Extracted {count} files from {} into {}",
        archive.display(),
        dest.path().display()
    );

    let root = single_wrapper_dir(dest.path())?.unwrap_or_else(|| dest.path().to_path_buf());
    Ok(MountedArchive {
        source: archive.to_path_buf(),
        root,
        release: Release::Remove { _dir: dest },
    })
}

impl Drop for MountedArchive {
    fn drop(&mut self) {
        // Runs before the TempDir fields drop, so the mount point is detached
        // before its directory is removed.
        if let Release::Detach {
            mount_point,
            hdiutil,
        } = &self.release
        {
            let result = Command::new(hdiutil)
                .arg("detach")
                .arg(mount_point.path())
                .arg("-quiet")
                .status();
            match result {
                Ok(status) if status.success() => {
                    log::info!("Unmounted {}", self.source.display())
                }
                Ok(status) => log::warn!(
                    "Detaching {} exited with {status}",
                    mount_point.path().display()
                ),
                Err(e) => log::warn!("Failed to detach {}: {e}", mount_point.path().display()),
            }
        }
    }
}
