//! File I/O: decoding source images and writing finished documents

use crate::types::*;
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};

/// Raster formats offered in file dialogs
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Whether `path` has one of [`SUPPORTED_EXTENSIONS`], ignoring case
pub fn is_supported(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Decode an image file, detecting the format from its contents
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let unreadable = |reason: String| PageError::UnreadableImage {
        path: path.to_owned(),
        reason,
    };

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| unreadable(e.to_string()))?;
    let image = reader.decode().map_err(|e| unreadable(e.to_string()))?;

    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Write `bytes` to a sibling `.part` file, then rename it over `path`.
///
/// On failure the partial file is removed and `path` is left untouched.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let partial = partial_path(path);

    let result = std::fs::write(&partial, bytes).and_then(|()| std::fs::rename(&partial, path));

    result.map_err(|source| {
        let _ = std::fs::remove_file(&partial);
        PageError::Write {
            path: path.to_owned(),
            source,
        }
    })
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}
