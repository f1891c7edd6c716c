//! Long-edge cap for uploaded photos.
//!
//! Compositing is CPU-bound per pixel, so inputs are downscaled before the
//! core ever sees them. Uses `fast_image_resize` (SIMD-optimized) with
//! CatmullRom interpolation.

use anyhow::{Context, Result};
use fast_image_resize as fir;
use image::RgbaImage;

/// Downscale so the longer edge is at most `long_edge`, preserving aspect
/// ratio. Images already within the cap are returned unchanged.
pub fn resize_long_edge(img: RgbaImage, long_edge: u32) -> Result<RgbaImage> {
    let (w, h) = img.dimensions();
    let long_edge = long_edge.max(1);
    if w.max(h) <= long_edge {
        return Ok(img);
    }

    let (new_w, new_h) = if w >= h {
        (long_edge, ((h as u64 * long_edge as u64) / w as u64).max(1) as u32)
    } else {
        (((w as u64 * long_edge as u64) / h as u64).max(1) as u32, long_edge)
    };

    let src = fir::images::Image::from_vec_u8(w, h, img.into_raw(), fir::PixelType::U8x4)
        .context("wrap source pixels for resize")?;
    let mut dst = fir::images::Image::new(new_w, new_h, fir::PixelType::U8x4);

    let mut resizer = fir::Resizer::new();
    let options = fir::ResizeOptions::new()
        .resize_alg(fir::ResizeAlg::Interpolation(fir::FilterType::CatmullRom));
    resizer
        .resize(&src, &mut dst, &Some(options))
        .context("resize image")?;

    RgbaImage::from_raw(new_w, new_h, dst.into_vec()).context("rebuild image after resize")
}
