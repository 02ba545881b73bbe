// Unit tests for Smile Discovery

use smile_discovery::core::{
    distance::{distance_between, get_distance_km, is_within_km},
    eligibility::{compute_pro_eligibility, PRO_THRESHOLD},
    geohash::encode_geohash,
    reviews::calculate_review_quality,
};
use smile_discovery::models::{GeoPoint, QualityTag, ReviewSample};

const CITIES: [(f64, f64); 5] = [
    (24.7136, 46.6753),   // Riyadh
    (30.0444, 31.2357),   // Cairo
    (51.5074, -0.1278),   // London
    (-33.8688, 151.2093), // Sydney
    (40.7128, -74.0060),  // New York
];

#[test]
fn test_distance_symmetry() {
    for &(lat1, lng1) in &CITIES {
        for &(lat2, lng2) in &CITIES {
            assert_eq!(
                get_distance_km(lat1, lng1, lat2, lng2),
                get_distance_km(lat2, lng2, lat1, lng1)
            );
        }
    }
}

#[test]
fn test_distance_to_self_is_zero() {
    for &(lat, lng) in &CITIES {
        assert_eq!(get_distance_km(lat, lng, lat, lng), 0.0);
    }
}

#[test]
fn test_distance_non_finite_inputs() {
    let bad = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
    for value in bad {
        assert_eq!(get_distance_km(value, 0.0, 0.0, 0.0), f64::INFINITY);
        assert_eq!(get_distance_km(0.0, value, 0.0, 0.0), f64::INFINITY);
        assert_eq!(get_distance_km(0.0, 0.0, value, 0.0), f64::INFINITY);
        assert_eq!(get_distance_km(0.0, 0.0, 0.0, value), f64::INFINITY);
    }
}

#[test]
fn test_one_degree_longitude_at_equator() {
    assert_eq!(get_distance_km(0.0, 0.0, 0.0, 1.0), 111.2);
}

#[test]
fn test_riyadh_to_cairo() {
    // Roughly 1630 km as the crow flies
    let d = distance_between(GeoPoint::new(24.7136, 46.6753), GeoPoint::new(30.0444, 31.2357));
    assert!((d - 1630.0).abs() < 20.0, "Expected ~1630km, got {}", d);
}

#[test]
fn test_within_km_boundary_inclusive() {
    let center = GeoPoint::new(0.0, 0.0);
    let point = GeoPoint::new(0.0, 1.0);
    assert!(is_within_km(center, point, 111.2));
    assert!(!is_within_km(center, point, 100.0));
}

#[test]
fn test_geohash_length_and_determinism() {
    for &(lat, lng) in &CITIES {
        for precision in [1, 5, 7, 9] {
            let first = encode_geohash(lat, lng, precision);
            assert_eq!(first.len(), precision);
            assert_eq!(first, encode_geohash(lat, lng, precision));
        }
    }
}

#[test]
fn test_geohash_alphabet() {
    let hash = encode_geohash(-33.8688, 151.2093, 12);
    assert!(hash
        .chars()
        .all(|c| "0123456789bcdefghjkmnpqrstuvwxyz".contains(c)));
}

#[test]
fn test_review_quality_extremes() {
    assert!((calculate_review_quality(5, 250).weighted_score - 100.0).abs() < 1e-9);
    assert!((calculate_review_quality(1, 0).weighted_score - 12.0).abs() < 1e-9);
}

#[test]
fn test_review_quality_full_tag_set() {
    let q = calculate_review_quality(5, 180);
    assert_eq!(
        q.quality_tags,
        vec![
            QualityTag::Verified,
            QualityTag::Detailed,
            QualityTag::Helpful,
            QualityTag::Excellent
        ]
    );
}

#[test]
fn test_eligibility_iff_threshold() {
    let reviews = vec![
        ReviewSample::new(5, "Dr. Layla was gentle and explained every step of the cleaning."),
        ReviewSample::new(4, "Good"),
        ReviewSample::new(2, ""),
    ];

    for avg in [1.0, 2.5, 3.5, 4.2, 4.9, 5.0] {
        for count in [0, 10, 50, 75, 100, 500] {
            let result = compute_pro_eligibility(avg, count, &reviews);
            assert_eq!(result.is_eligible, result.score >= PRO_THRESHOLD);
            assert!(result.score >= 0.0 && result.score <= 100.0);
        }
    }
}

#[test]
fn test_eligibility_reason_mentions_score() {
    let result = compute_pro_eligibility(3.0, 20, &[]);
    // 24 + 8 + 0
    assert_eq!(result.reason, "38.0 more points needed for Pro (32.0/100)");
}
