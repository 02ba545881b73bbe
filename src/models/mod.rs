// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ClinicTier, DerivedPlace, EligibilityStatus, GeoPoint, NearbyQuery, ProEligibilityResult,
    PublicClinic, QualityTag, RankedClinic, ReviewQualityMetrics, ReviewSample, Specialty,
};
pub use requests::{
    DistanceRequest, GeohashRequest, NearbyClinicsRequest, ProEligibilityRequest,
    ReverseGeocodeRequest, ReviewQualityRequest,
};
pub use responses::{
    DistanceResponse, ErrorResponse, GeohashResponse, HealthResponse, NearbyClinicsResponse,
    ProEligibilityResponse,
};
