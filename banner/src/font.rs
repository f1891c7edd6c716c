//! Font resolution and text measurement.
//!
//! A [`FontBook`] is resolved once at startup by walking an ordered fallback
//! list of font files and loading the first one that parses. All measurement
//! goes through the [`Measure`] trait so layout and fitting code can be
//! exercised in tests with deterministic fake metrics instead of a real
//! rasterizer.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};

use crate::error::BannerError;

/// Fallback font files, tried in order after any caller-supplied paths.
///
/// Mirrors the deployment layout: a `fonts/` directory shipped next to the
/// binary first, then the usual Debian/Ubuntu system locations.
const FALLBACK_FONT_PATHS: &[&str] = &[
    "fonts/DejaVuSans-Bold.ttf",
    "fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

/// Pixel-space measurement of a single line of text.
///
/// Implementations must be deterministic for a given (string, size) pair.
pub trait Measure {
    /// Bounding box (width, height) of `line` rendered at `size_px`.
    fn measure(&self, line: &str, size_px: u32) -> (u32, u32);

    /// Nominal line height (ascent minus descent) at `size_px`.
    ///
    /// Used as the layout fallback when every line measures to zero height
    /// (e.g. all-whitespace input).
    fn line_height(&self, size_px: u32) -> u32;
}

/// A resolved font plus the path it came from.
#[derive(Debug, Clone)]
pub struct FontBook {
    font: FontArc,
    path: PathBuf,
}

impl FontBook {
    /// Resolve a font by walking `extra_paths` then the built-in fallbacks.
    ///
    /// The first file that exists and parses as a font wins. Running out of
    /// candidates is the one fatal initialization error of the core.
    pub fn load(extra_paths: &[PathBuf]) -> Result<Self, BannerError> {
        let mut searched = 0;
        for path in extra_paths
            .iter()
            .map(PathBuf::as_path)
            .chain(FALLBACK_FONT_PATHS.iter().map(Path::new))
        {
            searched += 1;
            if !path.exists() {
                continue;
            }
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            if let Ok(font) = FontArc::try_from_vec(bytes) {
                return Ok(Self {
                    font,
                    path: path.to_path_buf(),
                });
            }
        }
        Err(BannerError::NoUsableFont { searched })
    }

    /// The file this font was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying font handle, for rasterization.
    pub fn font(&self) -> &FontArc {
        &self.font
    }
}

impl Measure for FontBook {
    fn measure(&self, line: &str, size_px: u32) -> (u32, u32) {
        let size = imageproc::drawing::text_size(PxScale::from(size_px as f32), &self.font, line);
        (size.0, size.1)
    }

    fn line_height(&self, size_px: u32) -> u32 {
        let scaled = self.font.as_scaled(PxScale::from(size_px as f32));
        (scaled.ascent() - scaled.descent()).ceil().max(1.0) as u32
    }
}
