use rayon::prelude::*;

use crate::consts::{ENHANCEMENT_GAIN, PARALLEL_PIXEL_THRESHOLD, RGBA_CHANNEL_COUNT};
use crate::error::Result;
use crate::media::{DecodedImage, ScaleFactor};

/// Upscale a surface by an integer factor.
///
/// The resize samples the source with bilinear weights (continuous-tone
/// smoothing, never block replication). Afterwards every pixel's R, G and B
/// channels are boosted by [`ENHANCEMENT_GAIN`] and clamped to 255; alpha is
/// carried through untouched. Output is bit-for-bit reproducible for a fixed
/// input and scale.
pub fn upscale(image: &DecodedImage, scale: ScaleFactor) -> Result<DecodedImage> {
    image.validate()?;

    let factor = scale.get() as u32;
    let width = image.width * factor;
    let height = image.height * factor;

    let mut pixels = resize_bilinear(image, width, height);
    brighten(&mut pixels);

    DecodedImage::new(width, height, pixels)
}

/// Resample the source surface to the given dimensions.
fn resize_bilinear(src: &DecodedImage, width: u32, height: u32) -> Vec<u8> {
    let row_stride = width as usize * RGBA_CHANNEL_COUNT;
    let mut pixels = vec![0u8; height as usize * row_stride];

    if width as usize * height as usize >= PARALLEL_PIXEL_THRESHOLD {
        pixels
            .par_chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(|(row, out)| resample_row(src, width, height, row as u32, out));
    } else {
        for (row, out) in pixels.chunks_exact_mut(row_stride).enumerate() {
            resample_row(src, width, height, row as u32, out);
        }
    }

    pixels
}

/// Fill one output row by sampling the source at the backprojected pixel
/// centers. Samples beyond the border clamp to the edge pixel.
fn resample_row(src: &DecodedImage, width: u32, height: u32, row: u32, out: &mut [u8]) {
    let scale_x = src.width as f32 / width as f32;
    let scale_y = src.height as f32 / height as f32;
    let last_x = src.width as usize - 1;
    let last_y = src.height as usize - 1;

    let src_y = ((row as f32 + 0.5) * scale_y - 0.5).max(0.0);
    let y0 = (src_y.floor() as usize).min(last_y);
    let y1 = (y0 + 1).min(last_y);
    let fy = src_y - y0 as f32;

    let sample = |y: usize, x: usize, channel: usize| -> f32 {
        let offset = (y * src.width as usize + x) * RGBA_CHANNEL_COUNT + channel;
        src.pixels[offset] as f32
    };

    for (col, pixel) in out.chunks_exact_mut(RGBA_CHANNEL_COUNT).enumerate() {
        let src_x = ((col as f32 + 0.5) * scale_x - 0.5).max(0.0);
        let x0 = (src_x.floor() as usize).min(last_x);
        let x1 = (x0 + 1).min(last_x);
        let fx = src_x - x0 as f32;

        for (channel, value) in pixel.iter_mut().enumerate() {
            let top = sample(y0, x0, channel) * (1.0 - fx) + sample(y0, x1, channel) * fx;
            let bottom = sample(y1, x0, channel) * (1.0 - fx) + sample(y1, x1, channel) * fx;
            *value = (top * (1.0 - fy) + bottom * fy).round() as u8;
        }
    }
}

/// Apply the channel gain to every pixel in place.
fn brighten(pixels: &mut [u8]) {
    if pixels.len() / RGBA_CHANNEL_COUNT >= PARALLEL_PIXEL_THRESHOLD {
        pixels
            .par_chunks_exact_mut(RGBA_CHANNEL_COUNT)
            .for_each(brighten_pixel);
    } else {
        for pixel in pixels.chunks_exact_mut(RGBA_CHANNEL_COUNT) {
            brighten_pixel(pixel);
        }
    }
}

fn brighten_pixel(pixel: &mut [u8]) {
    for channel in &mut pixel[..3] {
        *channel = ((*channel as f32) * ENHANCEMENT_GAIN).min(255.0) as u8;
    }
}
