//! Pure display-formatting helpers.
//!
//! The view layer calls these while building a template context; no
//! helper callbacks are registered with the template engine itself.

use crate::testimonial::{RATING_MAX, RATING_MIN};
use crate::types::Timestamp;

/// Format a timestamp for display, e.g. `March 5, 2026`.
pub fn format_date(ts: &Timestamp) -> String {
    ts.format("%B %-d, %Y").to_string()
}

/// Truncate to at most `max` characters, appending `...` when shortened.
/// Cuts on character boundaries, never mid-codepoint.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

/// Render a 1-5 rating as filled and empty stars, e.g. `★★★★☆`.
/// Out-of-range input is clamped.
pub fn stars(rating: i16) -> String {
    let filled = rating.clamp(RATING_MIN - 1, RATING_MAX) as usize;
    let mut out = String::new();
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..RATING_MAX as usize {
        out.push('☆');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
