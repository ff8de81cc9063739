use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbaImage};

use crate::error::{Result, UpwiseError};
use crate::media::DecodedImage;

/// Containers the pipeline accepts as input.
const ACCEPTED_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Decode PNG/JPEG/WEBP bytes into an RGBA surface.
///
/// The container is sniffed from the bytes themselves; file extensions are
/// never consulted.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage> {
    let format = image::guess_format(bytes)
        .map_err(|_| UpwiseError::UnsupportedFormat("unrecognized image container".to_string()))?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(UpwiseError::UnsupportedFormat(format!(
            "{} is not an accepted container",
            format.to_mime_type()
        )));
    }

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| UpwiseError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    DecodedImage::new(width, height, rgba.into_raw())
}

/// Encode a surface as a PNG data URI.
///
/// The output container is always PNG, whatever the source container was.
pub fn encode_png(image: &DecodedImage) -> Result<String> {
    image.validate()?;

    let buffer = RgbaImage::from_raw(image.width, image.height, image.pixels.clone())
        .expect("validated buffer matches dimensions");
    let mut encoded = Cursor::new(Vec::new());
    buffer
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|e| UpwiseError::Decode(e.to_string()))?;

    Ok(to_data_uri(
        ImageFormat::Png.to_mime_type(),
        encoded.get_ref(),
    ))
}

/// Wrap raw selected bytes as a data URI with their sniffed mime type.
///
/// Infallible: unrecognized bytes get a generic binary mime, mirroring how
/// a preview is produced before any decode is attempted.
pub fn encode_original(bytes: &[u8]) -> String {
    to_data_uri(sniff_mime(bytes), bytes)
}

/// Mime type of the sniffed container, or a generic binary fallback.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|f| f.to_mime_type())
        .unwrap_or("application/octet-stream")
}

fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
