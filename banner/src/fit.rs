//! Auto-fit: find the largest font size whose wrapped text fits a box.

use crate::font::Measure;
use crate::wrap;

/// Smallest font size the search will try. Below this the text is rendered
/// anyway and allowed to overflow.
pub const MIN_FONT_PX: u32 = 10;

/// Decrement between candidate sizes.
///
/// The search is a linear scan, not a binary search: rendered text height is
/// not guaranteed monotonic in font size across rasterizer backends, so the
/// scan checks every even step.
pub const FIT_STEP_PX: u32 = 2;

/// Lines wrapped at a specific font size. Immutable; a fresh value is
/// produced per fit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    pub lines: Vec<String>,
    pub size_px: u32,
}

/// Find the largest size `<= start_size_px` whose wrapped text fits
/// `box_w` x `box_h`, scanning downward in [`FIT_STEP_PX`] steps.
///
/// `line_spacing` is a multiplier (>= 1.0); the fractional part is charged
/// as extra height per line. A candidate size is accepted only when the
/// block height fits *and* no line overflows `box_w`: the wrapper keeps an
/// over-wide single word intact, so such a word keeps shrinking the font
/// instead. If nothing fits by [`MIN_FONT_PX`] the floor-size wrapping is
/// returned and overflow is tolerated, so a pathological string degrades
/// visually instead of failing the request.
pub fn fit<M: Measure>(
    metrics: &M,
    text: &str,
    box_w: u32,
    box_h: u32,
    start_size_px: u32,
    line_spacing: f32,
) -> WrappedText {
    let spacing = line_spacing.max(1.0);
    let mut size_px = start_size_px.max(MIN_FONT_PX);

    loop {
        let lines = wrap::wrap(metrics, text, size_px, box_w);
        let mut total_h = 0u32;
        let mut max_w = 0u32;
        for line in &lines {
            let (w, h) = metrics.measure(line, size_px);
            total_h += h + (h as f32 * (spacing - 1.0)) as u32;
            max_w = max_w.max(w);
        }

        if (total_h <= box_h && max_w <= box_w) || size_px == MIN_FONT_PX {
            return WrappedText { lines, size_px };
        }
        size_px = size_px.saturating_sub(FIT_STEP_PX).max(MIN_FONT_PX);
    }
}
