// Service exports
pub mod cache;
pub mod firestore;
pub mod geocoder;

pub use cache::{CacheError, CacheKey, CacheManager, CacheStats};
pub use firestore::{FirestoreClient, FirestoreError};
pub use geocoder::{GeocodeError, Geocoder};
