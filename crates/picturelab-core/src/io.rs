//! Reading and writing pictures.
//!
//! Decoding guesses the format from the content; encoding picks it from the
//! file extension. Both go through the `image` crate, built with PNG and
//! JPEG support. JPEG has no alpha channel, so it is written as RGB.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};
use log::info;
use thiserror::Error;

use crate::Picture;

pub use image::ImageFormat;

/// Errors that can occur while loading or saving a picture.
#[derive(Debug, Error)]
pub enum PictureError {
    /// The file could not be read.
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    /// The bytes are not a decodable image.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The extension does not name a supported output format.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Encoding failed.
    #[error("Failed to encode image: {0}")]
    Encode(String),

    /// The file could not be written.
    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// Decode a picture from encoded bytes.
///
/// # Errors
///
/// Returns `PictureError::Decode` if the format is unknown or the data is
/// corrupt.
pub fn decode_picture(bytes: &[u8]) -> Result<Picture, PictureError> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| PictureError::Decode(e.to_string()))?
        .decode()
        .map_err(|e| PictureError::Decode(e.to_string()))?;
    Ok(Picture::from_rgba_image(&img.into_rgba8()))
}

/// Load a picture from a file, recording its file name.
pub fn load_picture(path: impl AsRef<Path>) -> Result<Picture, PictureError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| PictureError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let picture = decode_picture(&bytes)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!(
        "loaded {} ({}x{})",
        path.display(),
        picture.height(),
        picture.width()
    );
    Ok(picture.with_file_name(name))
}

/// Encode a picture in the given format.
///
/// # Errors
///
/// Returns `PictureError::UnsupportedFormat` for formats other than PNG and
/// JPEG, and `PictureError::Encode` if encoding fails.
pub fn encode_picture(picture: &Picture, format: ImageFormat) -> Result<Vec<u8>, PictureError> {
    let rgba = DynamicImage::ImageRgba8(picture.to_rgba_image());
    let img = match format {
        ImageFormat::Png => rgba,
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(rgba.into_rgb8()),
        other => return Err(PictureError::UnsupportedFormat(format!("{other:?}"))),
    };

    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format)
        .map_err(|e| PictureError::Encode(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Save a picture, choosing the format from the path's extension.
pub fn save_picture(picture: &Picture, path: impl AsRef<Path>) -> Result<(), PictureError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .map_err(|_| PictureError::UnsupportedFormat(path.display().to_string()))?;
    let bytes = encode_picture(picture, format)?;
    fs::write(path, bytes).map_err(|e| PictureError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    info!(
        "saved {} ({}x{})",
        path.display(),
        picture.height(),
        picture.width()
    );
    Ok(())
}
