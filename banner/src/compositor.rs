//! Shape fill, alpha compositing and text rasterization.
//!
//! The compositing order is fixed: the colored shape is blended onto the
//! photo first, then text is drawn on the already-flattened result. Banner
//! translucency therefore affects only the background fill, never glyph
//! edges.

use ab_glyph::PxScale;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use imageproc::rect::Rect;

use crate::error::BannerError;
use crate::font::FontBook;
use crate::layout::PositionedLine;
use crate::region::Region;

/// Corner treatment of the filled shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerStyle {
    Square,
    Rounded(u32),
    /// Rounded with radius equal to half the shape's minor dimension.
    Capsule,
}

impl CornerStyle {
    fn radius(self, region: Region) -> u32 {
        match self {
            Self::Square => 0,
            Self::Rounded(r) => r.min(region.width().min(region.height()) / 2),
            Self::Capsule => region.width().min(region.height()) / 2,
        }
    }
}

/// Blend a filled shape onto a copy of `base`.
///
/// The shape is drawn into a transparent overlay buffer the size of the
/// image, then source-over composited: alpha 0 leaves the photo untouched,
/// alpha 255 replaces it, intermediate values blend linearly. The caller's
/// buffer is never mutated.
///
/// The blend keeps the destination alpha and treats the base as opaque;
/// a base with transparent pixels (e.g. a decoded PNG with an alpha
/// channel) is composited as if already flattened onto black. Photo
/// inputs are opaque and the pipeline flattens the result anyway.
pub fn composite_fill(
    base: &RgbaImage,
    region: Region,
    fill: Rgba<u8>,
    corner: CornerStyle,
) -> Result<RgbaImage, BannerError> {
    region.check_bounds(base.width(), base.height())?;

    let mut overlay = RgbaImage::new(base.width(), base.height());
    match corner {
        CornerStyle::Square => {
            let rect = Rect::at(region.x0 as i32, region.y0 as i32)
                .of_size(region.width(), region.height());
            imageproc::drawing::draw_filled_rect_mut(&mut overlay, rect, fill);
        }
        _ => fill_rounded(&mut overlay, region, fill, corner.radius(region)),
    }

    let mut out = base.clone();
    for (dst, src) in out.pixels_mut().zip(overlay.pixels()) {
        *dst = blend_over(*src, *dst);
    }
    Ok(out)
}

/// Fill a rounded rectangle by membership test over the region's pixels.
///
/// A pixel belongs to the shape when its center lies within `radius` of the
/// rectangle shrunk by `radius` on every side. Pixels outside every corner
/// zone clamp to themselves and always pass.
fn fill_rounded(overlay: &mut RgbaImage, region: Region, fill: Rgba<u8>, radius: u32) {
    let r = radius as f64;
    let (x0, y0) = (region.x0 as f64, region.y0 as f64);
    let (x1, y1) = (region.x1 as f64, region.y1 as f64);

    for y in region.y0..region.y1 {
        for x in region.x0..region.x1 {
            let px = x as f64 + 0.5;
            let py = y as f64 + 0.5;
            let dx = px - px.clamp(x0 + r, x1 - r);
            let dy = py - py.clamp(y0 + r, y1 - r);
            if dx * dx + dy * dy <= r * r {
                overlay.put_pixel(x, y, fill);
            }
        }
    }
}

/// Source-over blend with integer rounding: `(s*a + d*(255-a) + 127) / 255`.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let a = src.0[3] as u32;
    if a == 0 {
        return dst;
    }
    if a == 255 {
        return src;
    }
    let channel = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    Rgba([
        channel(src.0[0], dst.0[0]),
        channel(src.0[1], dst.0[1]),
        channel(src.0[2], dst.0[2]),
        dst.0[3],
    ])
}

/// Draw laid-out lines onto the composited image.
pub fn draw_lines(
    img: &mut RgbaImage,
    fonts: &FontBook,
    size_px: u32,
    color: Rgba<u8>,
    lines: &[PositionedLine],
) {
    let scale = PxScale::from(size_px as f32);
    for line in lines {
        draw_text_mut(
            img,
            color,
            line.x as i32,
            line.y as i32,
            scale,
            fonts.font(),
            &line.text,
        );
    }
}

/// Flatten to an opaque 3-channel image for encoding.
pub fn flatten(img: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(img.width(), img.height());
    for (dst, src) in out.pixels_mut().zip(img.pixels()) {
        *dst = Rgb([src.0[0], src.0[1], src.0[2]]);
    }
    out
}

/// Full compositing pass: shape fill, then text, then flatten.
pub fn render(
    base: &RgbaImage,
    region: Region,
    fill: Rgba<u8>,
    corner: CornerStyle,
    fonts: &FontBook,
    size_px: u32,
    text_color: Rgba<u8>,
    lines: &[PositionedLine],
) -> Result<RgbImage, BannerError> {
    let mut composited = composite_fill(base, region, fill, corner)?;
    draw_lines(&mut composited, fonts, size_px, text_color, lines);
    Ok(flatten(&composited))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_base(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))
    }

    fn region(x0: u32, y0: u32, x1: u32, y1: u32) -> Region {
        Region::new(x0, y0, x1, y1).unwrap()
    }

    #[test]
    fn alpha_zero_fill_leaves_base_untouched() {
        let base = white_base(40, 40);
        let out = composite_fill(&base, region(5, 5, 30, 30), Rgba([0, 0, 0, 0]), CornerStyle::Square)
            .unwrap();
        assert_eq!(out.as_raw(), base.as_raw());
    }

    #[test]
    fn alpha_full_fill_replaces_color_inside_region() {
        let base = white_base(40, 40);
        let out = composite_fill(
            &base,
            region(5, 5, 30, 30),
            Rgba([10, 20, 30, 255]),
            CornerStyle::Square,
        )
        .unwrap();
        assert_eq!(out.get_pixel(10, 10), &Rgba([10, 20, 30, 255]));
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn translucent_black_over_white_blends_linearly() {
        // (0*180 + 255*75 + 127) / 255 == 75 on every channel.
        let base = white_base(16, 16);
        let out = composite_fill(
            &base,
            region(0, 0, 16, 16),
            Rgba([0, 0, 0, 180]),
            CornerStyle::Square,
        )
        .unwrap();
        assert_eq!(out.get_pixel(8, 8), &Rgba([75, 75, 75, 255]));
    }

    #[test]
    fn blend_keeps_the_destination_alpha() {
        // (0*180 + 100*75 + 127) / 255 == 29; the base alpha 128 survives.
        let base = RgbaImage::from_pixel(8, 8, Rgba([100, 100, 100, 128]));
        let out = composite_fill(
            &base,
            region(0, 0, 8, 8),
            Rgba([0, 0, 0, 180]),
            CornerStyle::Square,
        )
        .unwrap();
        assert_eq!(out.get_pixel(4, 4), &Rgba([29, 29, 29, 128]));
    }

    #[test]
    fn compositing_is_deterministic() {
        let base = white_base(64, 64);
        let fill = Rgba([7, 42, 80, 200]);
        let a = composite_fill(&base, region(0, 0, 20, 64), fill, CornerStyle::Rounded(4)).unwrap();
        let b = composite_fill(&base, region(0, 0, 20, 64), fill, CornerStyle::Rounded(4)).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn base_image_is_not_mutated() {
        let base = white_base(32, 32);
        let before = base.as_raw().clone();
        let _ = composite_fill(&base, region(0, 0, 32, 32), Rgba([0, 0, 0, 128]), CornerStyle::Square)
            .unwrap();
        assert_eq!(base.as_raw(), &before);
    }

    #[test]
    fn rounded_corners_spare_the_extreme_corner_pixel() {
        let base = white_base(40, 40);
        let out = composite_fill(
            &base,
            region(0, 0, 40, 40),
            Rgba([0, 0, 0, 255]),
            CornerStyle::Rounded(10),
        )
        .unwrap();
        // Corner pixel lies outside the radius-10 arc, center pixel inside.
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(20, 20), &Rgba([0, 0, 0, 255]));
        // The arc midpoint column is filled where the square corner is not.
        assert_eq!(out.get_pixel(10, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn capsule_radius_is_half_the_minor_dimension() {
        let base = white_base(60, 20);
        let out = composite_fill(
            &base,
            region(0, 0, 60, 20),
            Rgba([0, 0, 0, 255]),
            CornerStyle::Capsule,
        )
        .unwrap();
        // Capsule on a 60x20 box: ends are half-circles of radius 10.
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(0, 10), &Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(30, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn out_of_bounds_region_is_rejected() {
        let base = white_base(30, 30);
        let err = composite_fill(&base, region(0, 0, 31, 30), Rgba([0; 4]), CornerStyle::Square);
        assert!(matches!(err, Err(BannerError::RegionOutOfBounds { .. })));
    }

    #[test]
    fn flatten_drops_alpha_only() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 200]));
        img.put_pixel(1, 0, Rgba([4, 5, 6, 255]));
        let flat = flatten(&img);
        assert_eq!(flat.get_pixel(0, 0), &Rgb([1, 2, 3]));
        assert_eq!(flat.get_pixel(1, 0), &Rgb([4, 5, 6]));
    }
}
