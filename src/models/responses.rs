use serde::{Deserialize, Serialize};
use crate::models::domain::{EligibilityStatus, ProEligibilityResult, RankedClinic};
use crate::services::CacheStats;

/// Response for the nearby clinics endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyClinicsResponse {
    pub clinics: Vec<RankedClinic>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Eligibility result together with its display band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProEligibilityResponse {
    #[serde(flatten)]
    pub result: ProEligibilityResult,
    pub status: EligibilityStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeohashResponse {
    pub geohash: String,
    pub precision: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResponse {
    /// `None` when any coordinate was not a finite number
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cache: CacheStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
