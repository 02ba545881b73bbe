use crate::models::{QualityTag, ReviewQualityMetrics};

/// Text length at which the length score saturates
const FULL_LENGTH_CHARS: f64 = 200.0;

const STAR_WEIGHT: f64 = 0.6;
const LENGTH_WEIGHT: f64 = 0.4;

const DETAILED_MIN_CHARS: usize = 100;
const HELPFUL_MIN_CHARS: usize = 150;

/// Calculate the weighted quality of a single review
///
/// Scoring formula:
/// ```text
/// star_score     = rating / 5 * 100
/// length_score   = min(text_length / 200, 1) * 100
/// weighted_score = star_score * 0.6 + length_score * 0.4
/// ```
///
/// Every review is tagged `Verified`. Length adds `Detailed` (100+) and
/// `Helpful` (150+); a 5-star rating adds `Excellent` and exactly 4 stars
/// adds `Good`. Ratings of 1-3 get no sentiment tag.
pub fn calculate_review_quality(rating: u8, text_length: usize) -> ReviewQualityMetrics {
    let star_score = f64::from(rating) / 5.0 * 100.0;

    let normalized_length = (text_length as f64 / FULL_LENGTH_CHARS).min(1.0);
    let length_score = normalized_length * 100.0;

    let weighted_score = star_score * STAR_WEIGHT + length_score * LENGTH_WEIGHT;

    let mut quality_tags = vec![QualityTag::Verified];
    if text_length >= DETAILED_MIN_CHARS {
        quality_tags.push(QualityTag::Detailed);
    }
    if text_length >= HELPFUL_MIN_CHARS {
        quality_tags.push(QualityTag::Helpful);
    }
    if rating >= 5 {
        quality_tags.push(QualityTag::Excellent);
    }
    if rating == 4 {
        quality_tags.push(QualityTag::Good);
    }

    ReviewQualityMetrics {
        star_score,
        length_score,
        weighted_score,
        quality_tags,
    }
}

/// Quality tags for a single review
pub fn review_quality_tags(rating: u8, text_length: usize) -> Vec<QualityTag> {
    calculate_review_quality(rating, text_length).quality_tags
}
