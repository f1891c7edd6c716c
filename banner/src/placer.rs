//! Placement styles and banner orchestration.
//!
//! A placement style picks the box geometry, corner treatment and fitting
//! parameters for one named banner look; the compositor does the pixel work.

use std::str::FromStr;

use image::{RgbImage, Rgba, RgbaImage};

use crate::compositor::{self, CornerStyle};
use crate::error::BannerError;
use crate::fit::{self, MIN_FONT_PX, WrappedText};
use crate::font::{FontBook, Measure};
use crate::layout;
use crate::region::Region;

/// Corner a badge is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
}

/// Named banner geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStyle {
    /// Vertical strip along the left edge, full image height.
    LeftStrip,
    /// Horizontal ribbon along the bottom edge, full image width.
    BottomRibbon,
    /// Small capsule badge auto-sized to a single line of text.
    CornerBadge { corner: Corner },
}

impl PlacementStyle {
    /// Default box-sizing ratio (strip width or ribbon height as a fraction
    /// of the image dimension). Badges auto-size and ignore this.
    pub fn default_ratio(self) -> f32 {
        match self {
            Self::LeftStrip => 0.22,
            Self::BottomRibbon => 0.16,
            Self::CornerBadge { .. } => 0.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LeftStrip => "left_strip",
            Self::BottomRibbon => "bottom_ribbon",
            Self::CornerBadge { corner: Corner::TopLeft } => "corner_badge",
            Self::CornerBadge { corner: Corner::TopRight } => "corner_badge_right",
        }
    }
}

impl FromStr for PlacementStyle {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left_strip" => Ok(Self::LeftStrip),
            "bottom_ribbon" => Ok(Self::BottomRibbon),
            "corner_badge" | "corner_badge_left" => Ok(Self::CornerBadge {
                corner: Corner::TopLeft,
            }),
            "corner_badge_right" => Ok(Self::CornerBadge {
                corner: Corner::TopRight,
            }),
            other => Err(BannerError::UnknownStyle(other.to_string())),
        }
    }
}

/// Resolved inputs for one compositing operation.
///
/// Built per request from user input plus preset/brand lookup, then
/// discarded. Width ratio is clamped to [0.10, 0.40] at use.
#[derive(Debug, Clone)]
pub struct BannerConfig {
    pub text: String,
    pub style: PlacementStyle,
    pub fill: Rgba<u8>,
    pub text_color: Rgba<u8>,
    /// Overrides the style's default box-sizing ratio when set.
    pub width_ratio: Option<f32>,
    /// Inner padding as a fraction of the box's minor dimension.
    pub padding_ratio: f32,
}

impl BannerConfig {
    pub fn new(text: impl Into<String>, style: PlacementStyle) -> Self {
        Self {
            text: text.into(),
            style,
            fill: Rgba([0, 0, 0, 180]),
            text_color: Rgba([255, 255, 255, 255]),
            width_ratio: None,
            padding_ratio: 0.06,
        }
    }
}

/// Render `config` onto a copy of `image`.
pub fn render_banner(
    fonts: &FontBook,
    image: &RgbaImage,
    config: &BannerConfig,
) -> Result<RgbImage, BannerError> {
    let (w, h) = image.dimensions();
    if w < 2 || h < 2 {
        return Err(BannerError::ImageTooSmall {
            width: w,
            height: h,
            style: config.style.name(),
        });
    }

    match config.style {
        PlacementStyle::LeftStrip => render_left_strip(fonts, image, config),
        PlacementStyle::BottomRibbon => render_bottom_ribbon(fonts, image, config),
        PlacementStyle::CornerBadge { corner } => render_corner_badge(fonts, image, config, corner),
    }
}

fn ratio(config: &BannerConfig) -> f32 {
    config
        .width_ratio
        .unwrap_or_else(|| config.style.default_ratio())
        .clamp(0.10, 0.40)
}

fn render_left_strip(
    fonts: &FontBook,
    image: &RgbaImage,
    config: &BannerConfig,
) -> Result<RgbImage, BannerError> {
    let (w, h) = image.dimensions();
    let strip_w = ((w as f32 * ratio(config)) as u32).max(40).min(w);
    let radius = (w.min(h) as f32 * 0.02) as u32;
    let region = Region::new(0, 0, strip_w, h)?;

    let pad = (strip_w as f32 * config.padding_ratio) as u32;
    let text_region = region.inset(pad);

    let start = ((strip_w as f32 * 0.28) as u32).max(14);
    let fitted = fit::fit(
        fonts,
        &config.text,
        text_region.width(),
        text_region.height(),
        start,
        1.05,
    );
    let placed = layout::layout(fonts, &fitted, text_region, 0.05);

    compositor::render(
        image,
        region,
        config.fill,
        CornerStyle::Rounded(radius),
        fonts,
        fitted.size_px,
        config.text_color,
        &placed,
    )
}

fn render_bottom_ribbon(
    fonts: &FontBook,
    image: &RgbaImage,
    config: &BannerConfig,
) -> Result<RgbImage, BannerError> {
    let (w, h) = image.dimensions();
    let ribbon_h = ((h as f32 * ratio(config)) as u32).max(40).min(h);
    let region = Region::new(0, h - ribbon_h, w, h)?;

    let pad = (ribbon_h as f32 * config.padding_ratio) as u32;
    let text_region = region.inset(pad);

    let start = ((h as f32 * 0.06) as u32).max(14);
    let fitted = fit::fit(
        fonts,
        &config.text,
        text_region.width(),
        text_region.height(),
        start,
        1.25,
    );
    let placed = layout::layout(fonts, &fitted, text_region, 0.25);

    compositor::render(
        image,
        region,
        config.fill,
        CornerStyle::Square,
        fonts,
        fitted.size_px,
        config.text_color,
        &placed,
    )
}

fn render_corner_badge(
    fonts: &FontBook,
    image: &RgbaImage,
    config: &BannerConfig,
    corner: Corner,
) -> Result<RgbImage, BannerError> {
    let (w, h) = image.dimensions();

    // Badges are single-line: collapse any user newlines to spaces.
    let line = config.text.split_whitespace().collect::<Vec<_>>().join(" ");
    let margin = (h as f32 * 0.03) as u32;
    if w <= 2 * margin + 2 {
        return Err(BannerError::ImageTooSmall {
            width: w,
            height: h,
            style: config.style.name(),
        });
    }

    // Auto-size width to the text; shrink the font (same linear scan as the
    // fitter) until the capsule fits between the margins.
    let mut size = ((h as f32 * 0.04) as u32).max(14);
    let (mut text_w, mut text_h) = fonts.measure(&line, size);
    loop {
        if text_h == 0 {
            text_h = fonts.line_height(size);
        }
        let pad = (text_h as f32 * 0.6) as u32;
        if text_w + 2 * pad + 2 * margin <= w || size == MIN_FONT_PX {
            break;
        }
        size = size.saturating_sub(fit::FIT_STEP_PX).max(MIN_FONT_PX);
        (text_w, text_h) = fonts.measure(&line, size);
    }

    let pad = (text_h as f32 * 0.6) as u32;
    let badge_w = (text_w + 2 * pad).min(w.saturating_sub(2 * margin)).max(2);
    let badge_h = (text_h + 2 * pad).min(h.saturating_sub(2 * margin)).max(2);

    let x0 = match corner {
        Corner::TopLeft => margin,
        Corner::TopRight => w - margin - badge_w,
    };
    let region = Region::new(x0, margin, x0 + badge_w, margin + badge_h)?;

    // Badges sit over busy photo areas; raise the fill alpha so the label
    // stays readable.
    let mut fill = config.fill;
    fill.0[3] = fill.0[3].max(220);

    let wrapped = WrappedText {
        lines: vec![line],
        size_px: size,
    };
    let placed = layout::layout(fonts, &wrapped, region, 0.0);

    compositor::render(
        image,
        region,
        fill,
        CornerStyle::Capsule,
        fonts,
        size,
        config.text_color,
        &placed,
    )
}
