use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use upwise_core::media::DecodedImage;

/// Build a solid-color RGBA surface.
pub fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> DecodedImage {
    let pixels = rgba.repeat((width * height) as usize);
    DecodedImage::new(width, height, pixels).expect("valid test surface")
}

/// Encode a solid-color PNG in memory.
pub fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("png encode");
    buf.into_inner()
}

/// Encode a solid-color JPEG in memory.
pub fn jpeg_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(rgb));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg)
        .expect("jpeg encode");
    buf.into_inner()
}

/// Encode a solid-color lossless WEBP in memory.
pub fn webp_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::WebP)
        .expect("webp encode");
    buf.into_inner()
}

/// A PNG signature followed by a truncated header: recognized container,
/// corrupt data.
pub fn corrupt_png_bytes() -> Vec<u8> {
    let mut bytes = png_bytes(4, 4, [255, 0, 0, 255]);
    bytes.truncate(24);
    bytes
}

/// Decode the base64 payload of a `data:<mime>;base64,` URI.
pub fn data_uri_payload(uri: &str) -> Vec<u8> {
    let payload = uri.split_once(',').expect("data URI has a payload").1;
    STANDARD.decode(payload).expect("valid base64 payload")
}

/// Dimensions of the image carried inside a data URI.
pub fn data_uri_dimensions(uri: &str) -> (u32, u32) {
    let bytes = data_uri_payload(uri);
    let img = image::load_from_memory(&bytes).expect("decodable payload");
    (img.width(), img.height())
}
