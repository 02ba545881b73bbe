use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::ReviewSample;

/// Query string for the nearby clinics endpoint
///
/// `lat` and `lng` come as a pair; with neither, clinics are listed in
/// directory order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_origin"))]
pub struct NearbyClinicsRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "radiusKm")]
    pub radius_km: Option<f64>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u16>,
}

fn validate_origin(req: &NearbyClinicsRequest) -> Result<(), ValidationError> {
    if req.lat.is_some() != req.lng.is_some() {
        return Err(ValidationError::new("origin_requires_lat_and_lng"));
    }
    Ok(())
}

/// Request to score a single review
///
/// Either the review text or its precomputed length may be given; the
/// text wins when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewQualityRequest {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "textLength", default)]
    pub text_length: Option<usize>,
}

impl ReviewQualityRequest {
    pub fn resolved_length(&self) -> usize {
        match &self.text {
            Some(text) => text.chars().count(),
            None => self.text_length.unwrap_or(0),
        }
    }
}

/// Request to compute Pro eligibility for a clinic
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProEligibilityRequest {
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    #[validate(nested)]
    #[serde(default)]
    pub reviews: Vec<ReviewSample>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeohashRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    #[validate(range(min = 1, max = 12))]
    pub precision: Option<usize>,
}

/// Distance query; non-finite values are accepted and yield a null distance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRequest {
    #[serde(rename = "fromLat")]
    pub from_lat: f64,
    #[serde(rename = "fromLng")]
    pub from_lng: f64,
    #[serde(rename = "toLat")]
    pub to_lat: f64,
    #[serde(rename = "toLng")]
    pub to_lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReverseGeocodeRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}
