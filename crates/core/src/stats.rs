//! Aggregate stats for the listing page.

use serde::Serialize;

/// Count and mean rating of the listed testimonials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingStats {
    pub total: usize,
    /// Mean rating rounded to one decimal place; `0.0` for an empty set.
    pub average_rating: f64,
}

/// Compute listing stats from the ratings of the fetched records.
pub fn listing_stats(ratings: &[i16]) -> ListingStats {
    if ratings.is_empty() {
        return ListingStats {
            total: 0,
            average_rating: 0.0,
        };
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    ListingStats {
        total: ratings.len(),
        average_rating: (mean * 10.0).round() / 10.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
