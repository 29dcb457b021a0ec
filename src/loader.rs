//! Sample producer: decodes image files into normalized pixel vectors.
//!
//! Images are converted to RGB, resized to `IMG_SIZE × IMG_SIZE` with a
//! linear filter and flattened row-major (`r, g, b` per pixel) into `[0, 1]`
//! floats. A file that cannot be decoded becomes a black image with the
//! requested label rather than an error.

use crate::architecture::{IMG_SIZE, INPUT_SIZE};
use crate::dataset::{Class, Sample};
use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions accepted when scanning a folder, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "ppm"];

/// Decode `path` into a sample labelled `label`.
pub fn load_sample<P: AsRef<Path>>(path: P, label: Class) -> Sample {
    let path = path.as_ref();
    match decode(path) {
        Ok(pixels) => Sample::new(pixels, label),
        Err(err) => {
            tracing::warn!("Cannot load {}: {}", path.display(), err);
            Sample::blank(INPUT_SIZE, label)
        }
    }
}

fn decode(path: &Path) -> image::ImageResult<Vec<f32>> {
    let rgb = image::open(path)?.to_rgb8();
    let resized = image::imageops::resize(&rgb, IMG_SIZE as u32, IMG_SIZE as u32, FilterType::Triangle);
    Ok(resized
        .into_raw()
        .into_iter()
        .map(|byte| byte as f32 / 255.0)
        .collect())
}

/// True for non-hidden files with a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(true, |name| name.starts_with('.'));
    if hidden {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Supported image files directly inside `folder`, sorted by path.
pub fn image_paths<P: AsRef<Path>>(folder: P) -> std::io::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load at most `max_count` images from `folder`, all labelled `label`.
///
/// An unreadable folder is logged and yields no samples.
pub fn load_samples_from_folder<P: AsRef<Path>>(folder: P, label: Class, max_count: usize) -> Vec<Sample> {
    let folder = folder.as_ref();
    let paths = match image_paths(folder) {
        Ok(paths) => paths,
        Err(err) => {
            tracing::warn!("Cannot open directory {}: {}", folder.display(), err);
            return Vec::new();
        }
    };

    paths
        .into_iter()
        .take(max_count)
        .map(|path| {
            tracing::debug!("Loading: {} (label={})", path.display(), label.index());
            load_sample(&path, label)
        })
        .collect()
}
