//! Depth map previews written as grayscale images

use std::path::Path;

use image::GrayImage;

use crate::io::error::{Result, StereogramError};
use crate::io::image::ensure_parent_dir;
use crate::spatial::grid::DepthMap;

/// Render depth as 8-bit gray: 0.0 is black, 1.0 is white
///
/// Samples outside `[0, 1]` are clamped, so pass a normalized map to use
/// the full gray range.
pub fn depth_to_gray(depth: &DepthMap) -> GrayImage {
    let values = depth.values();
    GrayImage::from_fn(depth.cols() as u32, depth.rows() as u32, |x, y| {
        let v = values
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        image::Luma([(v * 255.0).round() as u8])
    })
}

/// Write a grayscale preview of `depth` after normalization, inverted when
/// `invert` is set so it matches what the generator encodes
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_depth_preview<P: AsRef<Path>>(
    depth: &DepthMap,
    invert: bool,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let mut prepared = depth.normalized();
    if invert {
        prepared = prepared.inverted();
    }
    depth_to_gray(&prepared)
        .save(path)
        .map_err(|e| StereogramError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;
    log::info!("Saved depth preview to {}", path.display());
    Ok(())
}
