//! Image decoding into depth maps and patterns, and stereogram encoding

use std::path::Path;

use clap::ValueEnum;
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use ndarray::{Array2, Array3};

use crate::io::error::{Result, StereogramError, invalid_source};
use crate::spatial::grid::{DepthMap, Pattern, Stereogram};

/// Image channel that carries depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DepthChannel {
    /// First color channel
    #[default]
    Red,
    /// Second color channel
    Green,
    /// Third color channel
    Blue,
    /// Opacity channel
    Alpha,
    /// Perceptual brightness
    Luma,
}

fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| StereogramError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Extract one channel of a decoded image as depth samples in `[0, 1]`
///
/// # Errors
///
/// Returns an error if the image has no pixels
pub fn depth_from_image(img: &DynamicImage, channel: DepthChannel) -> Result<DepthMap> {
    let (width, height) = (img.width() as usize, img.height() as usize);

    let values = if channel == DepthChannel::Luma {
        let luma = img.to_luma32f();
        Array2::from_shape_fn((height, width), |(y, x)| {
            f64::from(luma.get_pixel(x as u32, y as u32).0[0])
        })
    } else {
        let index = match channel {
            DepthChannel::Green => 1,
            DepthChannel::Blue => 2,
            DepthChannel::Alpha => 3,
            DepthChannel::Red | DepthChannel::Luma => 0,
        };
        let rgba = img.to_rgba32f();
        Array2::from_shape_fn((height, width), |(y, x)| {
            let pixel = rgba.get_pixel(x as u32, y as u32).0;
            f64::from(pixel.get(index).copied().unwrap_or(0.0))
        })
    };

    DepthMap::new(values)
}

/// Load a depth map from an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image has no pixels
pub fn load_depth_map<P: AsRef<Path>>(path: P, channel: DepthChannel) -> Result<DepthMap> {
    let img = open_image(path.as_ref())?;
    log::info!(
        "Loaded depth map {} ({}x{}, {:?})",
        path.as_ref().display(),
        img.width(),
        img.height(),
        img.color()
    );
    depth_from_image(&img, channel)
}

/// Convert a decoded image to a pattern, keeping its channel layout
///
/// Gray, gray+alpha, RGB and RGBA images become 1, 2, 3 and 4 channel
/// patterns; higher bit depths are reduced to 8 bits.
///
/// # Errors
///
/// Returns an error if the image has no pixels
pub fn pattern_from_image(img: &DynamicImage) -> Result<Pattern> {
    let color = img.color();
    let channels = usize::from(color.channel_count());
    let (width, height) = (img.width() as usize, img.height() as usize);

    let raw = match (color.has_color(), color.has_alpha()) {
        (false, false) => img.to_luma8().into_raw(),
        (false, true) => img.to_luma_alpha8().into_raw(),
        (true, false) => img.to_rgb8().into_raw(),
        (true, true) => img.to_rgba8().into_raw(),
    };

    let pixels = Array3::from_shape_vec((height, width, channels), raw)
        .map_err(|e| invalid_source(&format!("pattern buffer does not match its shape: {e}")))?;
    Pattern::new(pixels)
}

/// Load a pattern from an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image has no pixels
pub fn load_pattern<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let img = open_image(path.as_ref())?;
    log::info!(
        "Loaded pattern {} ({}x{}, {:?})",
        path.as_ref().display(),
        img.width(),
        img.height(),
        img.color()
    );
    pattern_from_image(&img)
}

/// Encode a pixel grid as an image with a matching color layout
///
/// # Errors
///
/// Returns an error if the grid has a channel count other than 1 to 4
pub fn pixels_to_image(pixels: &Array3<u8>) -> Result<DynamicImage> {
    let (height, width, channels) = pixels.dim();
    let (w, h) = (width as u32, height as u32);
    let raw: Vec<u8> = pixels.iter().copied().collect();
    let mismatch = || invalid_source(&format!("{width}x{height}x{channels} buffer is inconsistent"));

    let img = match channels {
        1 => GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
        2 => GrayAlphaImage::from_raw(w, h, raw).map(DynamicImage::ImageLumaA8),
        3 => RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
        _ => {
            return Err(invalid_source(&format!(
                "cannot encode {channels} channels as an image"
            )));
        }
    };
    img.ok_or_else(mismatch)
}

/// Create the parent directory of `path` when it doesn't exist yet
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StereogramError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Save a stereogram; the format follows the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The stereogram's channel layout cannot be encoded
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_stereogram<P: AsRef<Path>>(stereogram: &Stereogram, path: P) -> Result<()> {
    let path = path.as_ref();
    let img = pixels_to_image(stereogram.pixels())?;
    ensure_parent_dir(path)?;
    img.save(path).map_err(|e| StereogramError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!(
        "Saved {}x{} stereogram to {}",
        stereogram.cols(),
        stereogram.rows(),
        path.display()
    );
    Ok(())
}
