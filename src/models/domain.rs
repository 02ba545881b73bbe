use serde::{Deserialize, Serialize};
use validator::Validate;

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::coord! { x: point.lng, y: point.lat }
    }
}

/// Listing tier shown on public surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicTier {
    Pro,
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialty {
    General,
    Orthodontics,
    Cosmetic,
    Pediatric,
    Surgery,
    Endodontics,
    Periodontics,
    Prosthodontics,
}

/// Published clinic listing (`clinics_public` document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicClinic {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "clinicId", default)]
    pub clinic_id: String,
    #[serde(rename = "ownerId", default)]
    pub owner_id: String,
    pub name: String,
    #[serde(rename = "heroImage", default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geohash: Option<String>,
    #[serde(rename = "isPublished", default)]
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<ClinicTier>,
    #[serde(rename = "averageRating", default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(rename = "totalReviews", default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
}

/// Clinic with its distance from the search origin and resolved tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedClinic {
    #[serde(flatten)]
    pub clinic: PublicClinic,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    #[serde(rename = "resolvedTier")]
    pub resolved_tier: ClinicTier,
}

/// UI quality signal attached to a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityTag {
    Verified,
    Detailed,
    Helpful,
    Excellent,
    Good,
}

/// Derived quality metrics for a single review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewQualityMetrics {
    /// 0-100, from the star rating
    #[serde(rename = "starScore")]
    pub star_score: f64,
    /// 0-100, from text length (capped at 200 characters)
    #[serde(rename = "lengthScore")]
    pub length_score: f64,
    #[serde(rename = "weightedScore")]
    pub weighted_score: f64,
    #[serde(rename = "qualityTags")]
    pub quality_tags: Vec<QualityTag>,
}

/// Review as fed into the eligibility computation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewSample {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    pub text: String,
}

impl ReviewSample {
    pub fn new(rating: u8, text: impl Into<String>) -> Self {
        Self {
            rating,
            text: text.into(),
        }
    }

    /// Text length in characters
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}

/// Outcome of the Pro eligibility computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProEligibilityResult {
    #[serde(rename = "isEligible")]
    pub is_eligible: bool,
    /// 0-100
    pub score: f64,
    /// 0-40
    #[serde(rename = "ratingComponent")]
    pub rating_component: f64,
    /// 0-40
    #[serde(rename = "volumeComponent")]
    pub volume_component: f64,
    /// 0-20
    #[serde(rename = "qualityComponent")]
    pub quality_component: f64,
    pub reason: String,
}

/// Display band for an eligibility score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityStatus {
    pub status: String,
    pub color: String,
}

/// Place derived from reverse geocoding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPlace {
    #[serde(rename = "countryCode", default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Parameters for a directory ranking pass
#[derive(Debug, Clone, Default)]
pub struct NearbyQuery {
    pub origin: Option<GeoPoint>,
    pub radius_km: Option<f64>,
    pub limit: usize,
}
