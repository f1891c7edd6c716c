//! Text-fitting and banner-compositing engine.
//!
//! Takes a decoded photo plus a [`BannerConfig`] and produces a new image
//! with a colored, auto-fitted text overlay. The pipeline is pure CPU work
//! with no I/O beyond the one-time font resolution at startup: wrap the text
//! at measured pixel widths, scan font sizes downward until the block fits,
//! center each line, blend the shape, draw the text, flatten.
//!
//! The crate has no internal concurrency and no shared mutable state; one
//! invocation owns its buffers end to end. Callers under concurrent load are
//! responsible for offloading these blocking calls, and for capping input
//! dimensions before handing images in.

mod compositor;
mod error;
mod fit;
mod font;
mod layout;
mod placer;
mod region;
mod wrap;

pub use compositor::{CornerStyle, composite_fill, draw_lines, flatten};
pub use error::BannerError;
pub use fit::{FIT_STEP_PX, MIN_FONT_PX, WrappedText, fit};
pub use font::{FontBook, Measure};
pub use layout::{PositionedLine, layout};
pub use placer::{BannerConfig, Corner, PlacementStyle, render_banner};
pub use region::Region;
pub use wrap::wrap;

use std::path::{Path, PathBuf};

use image::{RgbImage, RgbaImage};

/// Ready-to-render engine: a resolved font plus the compositing entry point.
pub struct Composer {
    fonts: FontBook,
}

impl Composer {
    /// Resolve fonts and build a composer.
    ///
    /// `extra_font_paths` are tried before the built-in fallback list; total
    /// absence of any usable font is the one fatal initialization error.
    pub fn try_new(extra_font_paths: &[PathBuf]) -> Result<Self, BannerError> {
        Ok(Self {
            fonts: FontBook::load(extra_font_paths)?,
        })
    }

    /// The font file the composer resolved at startup.
    pub fn font_path(&self) -> &Path {
        self.fonts.path()
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    /// Composite `config` onto a copy of `image`. The sole core entry point;
    /// the caller keeps ownership of its input buffer.
    pub fn render_banner(
        &self,
        image: &RgbaImage,
        config: &BannerConfig,
    ) -> Result<RgbImage, BannerError> {
        placer::render_banner(&self.fonts, image, config)
    }
}
