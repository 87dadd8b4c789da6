use crate::types::errors::{ConvertError, ConvertResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extract every entry of a zip archive under `dest_path`.
/// Entries whose names would escape `dest_path` are skipped.
pub(super) fn extract_zip(archive_path: &Path, dest_path: &Path) -> ConvertResult<usize> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| ConvertError::Archive(format!("Invalid or corrupt ZIP: {e}")))?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| ConvertError::Archive(format!("Failed to read entry {i}: {e}")))?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                log::warn!("Skipping unsafe zip entry {}", entry.name());
                continue;
            }
        };

        let output_path = dest_path.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&output_path)?;
            io::copy(&mut entry, &mut outfile)?;
            count += 1;
        }
    }
    Ok(count)
}

/// If `dest_path` holds nothing but one folder, return that folder.
///
/// Zipped exports often wrap their documents in a single top-level folder;
/// the documents are then read from inside it.
pub(super) fn single_wrapper_dir(dest_path: &Path) -> ConvertResult<Option<PathBuf>> {
    let entries: Vec<_> = fs::read_dir(dest_path)?.filter_map(|e| e.ok()).collect();

    if entries.len() != 1 {
        return Ok(None);
    }

    let wrapper = entries[0].path();
    Ok(wrapper.is_dir().then_some(wrapper))
}
