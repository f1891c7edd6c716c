//! Geometric placement of wrapped lines within a region.

use crate::fit::WrappedText;
use crate::font::Measure;
use crate::region::Region;

/// A line of text with its resolved top-left drawing position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedLine {
    pub text: String,
    pub x: u32,
    pub y: u32,
}

/// Center `wrapped` within `region`: the block vertically, each line
/// individually horizontally.
///
/// The shared line height comes from the tallest measured line (the font's
/// nominal line height when every line is empty). A block taller than the
/// region renders top-anchored at `region.y0` rather than at a negative
/// offset; an over-wide line left-anchors at `region.x0` the same way.
pub fn layout<M: Measure>(
    metrics: &M,
    wrapped: &WrappedText,
    region: Region,
    spacing_fraction: f32,
) -> Vec<PositionedLine> {
    let size = wrapped.size_px;
    let line_h = wrapped
        .lines
        .iter()
        .map(|line| metrics.measure(line, size).1)
        .max()
        .filter(|&h| h > 0)
        .unwrap_or_else(|| metrics.line_height(size));

    let n = wrapped.lines.len() as u32;
    let gap = (line_h as f32 * spacing_fraction) as u32;
    let block_h = n * line_h + n.saturating_sub(1) * gap;

    let mut y = region.y0 + (region.height().saturating_sub(block_h)) / 2;
    let mut placed = Vec::with_capacity(wrapped.lines.len());
    for line in &wrapped.lines {
        let line_w = metrics.measure(line, size).0;
        let x = region.x0 + (region.width().saturating_sub(line_w)) / 2;
        placed.push(PositionedLine {
            text: line.clone(),
            x,
            y,
        });
        y += line_h + gap;
    }
    placed
}
