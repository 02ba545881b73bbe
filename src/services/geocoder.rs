use crate::models::DerivedPlace;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Geocoder returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid coordinates: {0}, {1}")]
    InvalidCoordinates(f64, f64),
}

#[derive(Debug, Default, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    country_code: Option<String>,
    country: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    hamlet: Option<String>,
}

impl From<NominatimAddress> for DerivedPlace {
    fn from(addr: NominatimAddress) -> Self {
        DerivedPlace {
            country_code: addr.country_code.map(|c| c.to_uppercase()),
            country: addr.country,
            city: addr.city.or(addr.town).or(addr.village).or(addr.hamlet),
        }
    }
}

/// Reverse geocoder for a Nominatim-compatible endpoint
pub struct Geocoder {
    base_url: String,
    user_agent: String,
    client: Client,
}

impl Geocoder {
    pub fn new(base_url: String, user_agent: String, timeout_secs: u64) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            user_agent,
            client,
        })
    }

    /// Resolve a coordinate to country and city
    ///
    /// Never fails: any error yields an empty place.
    pub async fn reverse(&self, lat: f64, lng: f64) -> DerivedPlace {
        match self.try_reverse(lat, lng).await {
            Ok(place) => place,
            Err(e) => {
                tracing::warn!("Reverse geocoding failed for ({}, {}): {}", lat, lng, e);
                DerivedPlace::default()
            }
        }
    }

    async fn try_reverse(&self, lat: f64, lng: f64) -> Result<DerivedPlace, GeocodeError> {
        if !(lat.is_finite() && lng.is_finite()) {
            return Err(GeocodeError::InvalidCoordinates(lat, lng));
        }

        let url = format!("{}/reverse", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
            ])
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status()));
        }

        let body: ReverseResponse = response.json().await?;
        Ok(body.address.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_fallback_order() {
        let addr = NominatimAddress {
            country_code: Some("eg".to_string()),
            country: Some("Egypt".to_string()),
            city: None,
            town: None,
            village: Some("Abu Simbel".to_string()),
            hamlet: Some("ignored".to_string()),
        };

        let place = DerivedPlace::from(addr);
        assert_eq!(place.country_code.as_deref(), Some("EG"));
        assert_eq!(place.city.as_deref(), Some("Abu Simbel"));
    }

    #[tokio::test]
    async fn test_invalid_coordinates_degrade_to_empty() {
        let geocoder = Geocoder::new("http://127.0.0.1:9".to_string(), "smile-test".to_string(), 1).unwrap();
        assert_eq!(geocoder.reverse(f64::NAN, 0.0).await, DerivedPlace::default());
    }
}
