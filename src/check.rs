use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};

use crate::error::ValidationFailure;

/// JPEG end-of-image marker.
const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

/// Returns the extension of a dataset file name: the text after the first `.`
/// up to the next `.` (`"img.tar.gz"` gives `"tar"`).
pub fn file_extension(name: &str) -> Result<&str, ValidationFailure> {
    name.split('.')
        .nth(1)
        .ok_or_else(|| ValidationFailure::MalformedName { name: name.to_string() })
}

/// Same rule as [`file_extension`], applied to the raw bytes of the last path
/// component so names that are not valid UTF-8 still get an extension.
pub fn path_extension(path: &Path) -> Result<String, ValidationFailure> {
    let name = path.file_name().unwrap_or_default();
    match name.as_encoded_bytes().split(|&b| b == b'.').nth(1) {
        Some(ext) => Ok(String::from_utf8_lossy(ext).into_owned()),
        None => Err(ValidationFailure::MalformedName {
            name: name.to_string_lossy().into_owned(),
        }),
    }
}

/// Reads `path`, decodes it using the format detected from its content (the
/// file extension is only a fallback), and converts the pixels to 8-bit RGB.
/// The converted buffer is dropped.
pub fn verify_image(path: &Path) -> Result<(), ValidationFailure> {
    let bytes = fs::read(path)?;

    let mut reader = ImageReader::new(Cursor::new(bytes.as_slice())).with_guessed_format()?;
    if reader.format().is_none() {
        if let Ok(format) = ImageFormat::from_path(path) {
            reader.set_format(format);
        }
    }
    let format = reader.format();
    let img = reader.decode()?;

    // The JPEG decoder fills missing scan data instead of failing.
    if format == Some(ImageFormat::Jpeg) && !has_jpeg_trailer(&bytes) {
        return Err(ValidationFailure::Truncated { format: ImageFormat::Jpeg });
    }

    let _ = img.to_rgb8();
    Ok(())
}

/// True when the data ends with the EOI marker, ignoring trailing zero padding.
fn has_jpeg_trailer(bytes: &[u8]) -> bool {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    bytes[..end].ends_with(&JPEG_EOI)
}
