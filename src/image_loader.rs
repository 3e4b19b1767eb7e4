use crate::error::{AppError, Result};
use crate::image_cache::CachedImage;
use log::warn;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decodes an image file into raw RGBA8 data.
///
/// Runs on the calling thread; PNG decoding of a local file is treated as fast.
pub fn load_image_blocking(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(image::ImageError::IoError(e)))?
        .decode()?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}

/// Wraps raw RGBA8 data as a Slint image.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&data, width, height);
    Image::from_rgba8(buffer)
}

/// Decodes `path` into a display-ready cache entry.
///
/// Never fails: an unreadable or corrupt file becomes `CachedImage::Failed`.
pub fn decode_for_display(path: &Path) -> CachedImage {
    match load_image_blocking(path) {
        Ok((data, width, height)) => CachedImage::Decoded {
            image: create_slint_image(data, width, height),
            width,
            height,
        },
        Err(e) => {
            warn!("Failed to decode {}: {}", path.display(), e);
            CachedImage::Failed(e.to_string())
        }
    }
}
