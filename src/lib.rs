//! Smile Discovery - clinic discovery and review scoring service for the Smile dental app
//!
//! The `core` module holds the pure computations the mobile client relies on:
//! haversine distance, geohash bucketing, review quality and Pro eligibility
//! scoring, and "near me" ranking of published clinics. `services` and
//! `routes` expose them over HTTP alongside the clinic directory.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_review_quality, compute_pro_eligibility, encode_geohash, get_distance_km,
    ClinicDirectory,
};
pub use models::{GeoPoint, ProEligibilityResult, PublicClinic, ReviewQualityMetrics, ReviewSample};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(get_distance_km(0.0, 0.0, 0.0, 1.0), 111.2);
        assert_eq!(encode_geohash(0.0, 0.0, 5), "s0000");
    }
}
