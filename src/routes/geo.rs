use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{encode_geohash, get_distance_km, CLINIC_PRECISION, DEFAULT_PRECISION};
use crate::models::{
    DerivedPlace, DistanceRequest, DistanceResponse, GeohashRequest, GeohashResponse,
    ReverseGeocodeRequest,
};
use crate::routes::{validation_failed, AppState};
use crate::services::CacheKey;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/geo/geohash", web::get().to(geohash))
        .route("/geo/distance", web::get().to(distance))
        .route("/geo/reverse", web::get().to(reverse_geocode));
}

/// GET /api/v1/geo/geohash?lat=..&lng=..&precision=5
async fn geohash(req: web::Query<GeohashRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let precision = req.precision.unwrap_or(DEFAULT_PRECISION);
    HttpResponse::Ok().json(GeohashResponse {
        geohash: encode_geohash(req.lat, req.lng, precision),
        precision,
    })
}

/// GET /api/v1/geo/distance?fromLat=..&fromLng=..&toLat=..&toLng=..
async fn distance(req: web::Query<DistanceRequest>) -> impl Responder {
    let km = get_distance_km(req.from_lat, req.from_lng, req.to_lat, req.to_lng);

    HttpResponse::Ok().json(DistanceResponse {
        distance_km: km.is_finite().then_some(km),
    })
}

/// GET /api/v1/geo/reverse?lat=..&lng=..
///
/// Results are cached per geohash cell; failures return an empty place.
async fn reverse_geocode(
    state: web::Data<AppState>,
    req: web::Query<ReverseGeocodeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let key = CacheKey::place(&encode_geohash(req.lat, req.lng, CLINIC_PRECISION));
    if let Ok(place) = state.cache.get::<DerivedPlace>(&key).await {
        return HttpResponse::Ok().json(place);
    }

    let place = state.geocoder.reverse(req.lat, req.lng).await;
    // Empty places are usually transient failures
    if place != DerivedPlace::default() {
        if let Err(e) = state.cache.set(&key, &place).await {
            tracing::warn!("Failed to cache place {}: {}", key, e);
        }
    }

    HttpResponse::Ok().json(place)
}
