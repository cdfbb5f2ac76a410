//! Loading a user-chosen image file for the detection page preview.
//!
//! Only PNG and JPEG are accepted. Errors never escape the page: the caller
//! logs them and shows no preview.

use std::fmt;
use std::path::Path;

use bevy::image::{CompressedImageFormats, ImageSampler, ImageType, TextureError};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;

/// Lower-case extensions the preview can decode.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

#[derive(Debug)]
pub enum PreviewError {
    /// The file extension is missing or not an image format we decode.
    UnsupportedType(String),
    Io(std::io::Error),
    Decode(TextureError),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::UnsupportedType(ext) if ext.is_empty() => write!(
                f,
                "file has no extension; expected one of {}",
                SUPPORTED_EXTENSIONS.join(", ")
            ),
            PreviewError::UnsupportedType(ext) => write!(
                f,
                "unsupported image type '{ext}'; expected one of {}",
                SUPPORTED_EXTENSIONS.join(", ")
            ),
            PreviewError::Io(e) => write!(f, "could not read image: {e}"),
            PreviewError::Decode(e) => write!(f, "could not decode image: {e}"),
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreviewError::UnsupportedType(_) => None,
            PreviewError::Io(e) => Some(e),
            PreviewError::Decode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for PreviewError {
    fn from(e: std::io::Error) -> Self {
        PreviewError::Io(e)
    }
}

impl From<TextureError> for PreviewError {
    fn from(e: TextureError) -> Self {
        PreviewError::Decode(e)
    }
}

/// Validated, lower-cased extension of `path`.
pub fn image_extension(path: &Path) -> Result<String, PreviewError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(PreviewError::UnsupportedType(ext))
    }
}

/// Decode encoded image bytes of the given extension.
pub fn decode_image(bytes: &[u8], extension: &str) -> Result<Image, PreviewError> {
    let image = Image::from_buffer(
        bytes,
        ImageType::Extension(extension),
        CompressedImageFormats::NONE,
        true,
        ImageSampler::linear(),
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )?;
    Ok(image)
}

/// Read and decode an image file.
pub fn load_image_file(path: &Path) -> Result<Image, PreviewError> {
    let extension = image_extension(path)?;
    let bytes = std::fs::read(path)?;
    decode_image(&bytes, &extension)
}

/// File name shown in the UI for `path`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_png_and_jpeg_any_case() {
        assert_eq!(image_extension(Path::new("road.png")).ok().as_deref(), Some("png"));
        assert_eq!(image_extension(Path::new("a/b/CAM.JPG")).ok().as_deref(), Some("jpg"));
        assert_eq!(image_extension(Path::new("x.jpeg")).ok().as_deref(), Some("jpeg"));
    }

    #[test]
    fn test_rejects_other_extensions() {
        let err = image_extension(Path::new("clip.mp4"));
        assert!(matches!(err, Err(PreviewError::UnsupportedType(ref e)) if e == "mp4"));
        let none = image_extension(Path::new("README"));
        assert!(matches!(none, Err(PreviewError::UnsupportedType(ref e)) if e.is_empty()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_image_file(Path::new("/nonexistent/dir/frame.png"));
        assert!(matches!(result, Err(PreviewError::Io(_))));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = decode_image(b"definitely not a png", "png");
        assert!(matches!(result, Err(PreviewError::Decode(_))));
    }

    #[test]
    fn test_unsupported_type_is_checked_before_reading() {
        // The file does not exist; the extension check must fail first.
        let result = load_image_file(Path::new("/nonexistent/clip.gif"));
        assert!(matches!(result, Err(PreviewError::UnsupportedType(_))));
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let msg = PreviewError::UnsupportedType("gif".into()).to_string();
        assert!(msg.contains("gif"));
        assert!(msg.contains("png"));
        assert!(PreviewError::UnsupportedType(String::new())
            .to_string()
            .contains("no extension"));
    }

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/tmp/shots/cam-01.png")), "cam-01.png");
    }
}
