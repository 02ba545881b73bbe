// Core algorithm exports
pub mod directory;
pub mod distance;
pub mod eligibility;
pub mod geohash;
pub mod reviews;
pub mod tier;

pub use directory::{ClinicDirectory, DirectoryResult};
pub use distance::{distance_between, get_distance_km, haversine_distance, is_within_km};
pub use eligibility::{compute_pro_eligibility, eligibility_status, PRO_THRESHOLD};
pub use geohash::{encode_geohash, ensure_geohash, CLINIC_PRECISION, DEFAULT_PRECISION};
pub use reviews::{calculate_review_quality, review_quality_tags};
pub use tier::{clinic_tier, is_pro_preview};
