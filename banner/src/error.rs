//! Error taxonomy for the compositing core.
//!
//! Every fallible stage returns a concrete variant instead of a stringly
//! error, so the boundary layer (CLI today, HTTP tomorrow) can map each kind
//! to its own user-facing response. Fit overflow is deliberately *not* here:
//! text that cannot shrink to fit renders at the floor size instead.

/// Errors reportable by the banner core.
#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    /// A placement style name that is not one of the known variants.
    #[error("unknown placement style: {0:?}")]
    UnknownStyle(String),

    /// A target region that does not lie fully inside the image.
    #[error("region {x0},{y0}..{x1},{y1} exceeds image bounds {width}x{height}")]
    RegionOutOfBounds {
        x0: u32,
        y0: u32,
        x1: u32,
        y1: u32,
        width: u32,
        height: u32,
    },

    /// A region with zero or negative extent.
    #[error("degenerate region: {x0},{y0}..{x1},{y1}")]
    DegenerateRegion { x0: u32, y0: u32, x1: u32, y1: u32 },

    /// None of the configured or fallback font paths produced a usable font.
    #[error("no usable font found ({searched} paths searched)")]
    NoUsableFont { searched: usize },

    /// The image is too small to host the requested banner geometry.
    #[error("image {width}x{height} is too small for a {style} banner")]
    ImageTooSmall {
        width: u32,
        height: u32,
        style: &'static str,
    },
}
