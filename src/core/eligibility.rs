use crate::core::reviews::calculate_review_quality;
use crate::models::{EligibilityStatus, ProEligibilityResult, ReviewSample};

/// Minimum total score for the Pro tier
pub const PRO_THRESHOLD: f64 = 70.0;

const RATING_MAX_POINTS: f64 = 40.0;
const VOLUME_MAX_POINTS: f64 = 40.0;
const QUALITY_MAX_POINTS: f64 = 20.0;

/// Review count at which the volume component saturates
const VOLUME_CAP: u32 = 100;

/// Compute Pro eligibility for a clinic
///
/// Scoring formula (0-100):
/// ```text
/// rating  = avg_rating / 5 * 40                 (0-40)
/// volume  = min(review_count, 100) / 100 * 40   (0-40)
/// quality = mean(weighted review score) / 100 * 20  (0-20)
/// ```
/// A clinic is eligible at 70 points or more.
pub fn compute_pro_eligibility(
    avg_rating: f64,
    review_count: u32,
    reviews: &[ReviewSample],
) -> ProEligibilityResult {
    let rating_component = avg_rating / 5.0 * RATING_MAX_POINTS;

    let normalized_volume = f64::from(review_count.min(VOLUME_CAP)) / f64::from(VOLUME_CAP);
    let volume_component = normalized_volume * VOLUME_MAX_POINTS;

    let avg_quality_score = if reviews.is_empty() {
        0.0
    } else {
        let total: f64 = reviews
            .iter()
            .map(|r| calculate_review_quality(r.rating, r.text_length()).weighted_score)
            .sum();
        total / reviews.len() as f64
    };
    let quality_component = avg_quality_score / 100.0 * QUALITY_MAX_POINTS;

    let score = rating_component + volume_component + quality_component;
    let is_eligible = score >= PRO_THRESHOLD;

    let reason = if is_eligible {
        format!("Your clinic meets Pro eligibility criteria ({:.1}/100)", score)
    } else {
        format!(
            "{:.1} more points needed for Pro ({:.1}/100)",
            PRO_THRESHOLD - score,
            score
        )
    };

    ProEligibilityResult {
        is_eligible,
        score,
        rating_component,
        volume_component,
        quality_component,
        reason,
    }
}

/// Display band for an eligibility score
pub fn eligibility_status(score: f64) -> EligibilityStatus {
    let (status, color) = if score >= 80.0 {
        ("Excellent", "#10b981")
    } else if score >= PRO_THRESHOLD {
        ("Good", "#3b82f6")
    } else if score >= 55.0 {
        ("Fair", "#f59e0b")
    } else {
        ("Growing", "#6b7280")
    };

    EligibilityStatus {
        status: status.to_string(),
        color: color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_text(chars: usize) -> String {
        "a".repeat(chars)
    }

    #[test]
    fn test_perfect_clinic() {
        let reviews = vec![ReviewSample::new(5, long_text(250)); 3];
        let result = compute_pro_eligibility(5.0, 150, &reviews);

        assert!((result.rating_component - 40.0).abs() < 1e-9);
        assert!((result.volume_component - 40.0).abs() < 1e-9);
        assert!((result.quality_component - 20.0).abs() < 1e-9);
        assert!((result.score - 100.0).abs() < 1e-9);
        assert!(result.is_eligible);
        assert_eq!(result.reason, "Your clinic meets Pro eligibility criteria (100.0/100)");
    }

    #[test]
    fn test_no_reviews_quality_is_zero() {
        let result = compute_pro_eligibility(4.0, 10, &[]);

        assert_eq!(result.quality_component, 0.0);
        assert!((result.score - (32.0 + 4.0)).abs() < 1e-9);
        assert!(!result.is_eligible);
        assert_eq!(result.reason, "34.0 more points needed for Pro (36.0/100)");
    }

    #[test]
    fn test_volume_capped_at_hundred() {
        let a = compute_pro_eligibility(0.0, 100, &[]);
        let b = compute_pro_eligibility(0.0, 10_000, &[]);
        assert_eq!(a.volume_component, b.volume_component);
    }

    #[test]
    fn test_eligibility_matches_threshold() {
        // 40 (rating) + 20 (volume) + 7.2 (quality) = 67.2
        let reviews = vec![ReviewSample::new(5, long_text(0)), ReviewSample::new(1, long_text(0))];
        let result = compute_pro_eligibility(5.0, 50, &reviews);
        // mean weighted score = (60 + 12) / 2 = 36
        assert!((result.quality_component - 7.2).abs() < 1e-9);
        assert!((result.score - 67.2).abs() < 1e-9);
        assert_eq!(result.is_eligible, result.score >= PRO_THRESHOLD);
        assert!(!result.is_eligible);

        // 40 + 30 + 0 lands exactly on the threshold
        let result = compute_pro_eligibility(5.0, 75, &[]);
        assert_eq!(result.score, PRO_THRESHOLD);
        assert!(result.is_eligible);
        assert_eq!(result.reason, "Your clinic meets Pro eligibility criteria (70.0/100)");
    }

    #[test]
    fn test_status_bands() {
        assert_eq!(eligibility_status(85.0).status, "Excellent");
        assert_eq!(eligibility_status(80.0).color, "#10b981");
        assert_eq!(eligibility_status(70.0).status, "Good");
        assert_eq!(eligibility_status(55.0).status, "Fair");
        assert_eq!(eligibility_status(54.9).status, "Growing");
        assert_eq!(eligibility_status(54.9).color, "#6b7280");
    }
}
