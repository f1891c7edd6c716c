//! Greedy word wrapping against measured pixel widths.

use crate::font::Measure;

/// Break `text` into lines that each fit within `max_width_px`.
///
/// Explicit newlines are honored first (each segment wraps independently, so
/// user-intended breaks survive). Within a segment, whitespace-separated
/// words accumulate greedily; a word that would overflow flushes the current
/// line and starts the next. A single word wider than `max_width_px` is kept
/// intact on its own line rather than split mid-word.
///
/// Empty input yields exactly one empty line, never zero lines, so a
/// degenerate box still renders something predictable downstream.
pub fn wrap<M: Measure>(metrics: &M, text: &str, size_px: u32, max_width_px: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(metrics, segment.trim(), size_px, max_width_px, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_segment<M: Measure>(
    metrics: &M,
    segment: &str,
    size_px: u32,
    max_width_px: u32,
    lines: &mut Vec<String>,
) {
    let mut words = segment.split_whitespace();
    let Some(first) = words.next() else {
        lines.push(String::new());
        return;
    };

    let mut line = first.to_string();
    for word in words {
        let candidate = format!("{line} {word}");
        if metrics.measure(&candidate, size_px).0 <= max_width_px {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    lines.push(line);
}
