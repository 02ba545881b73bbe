use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{compute_pro_eligibility, eligibility_status};
use crate::models::{
    ErrorResponse, GeoPoint, HealthResponse, NearbyClinicsRequest, NearbyClinicsResponse,
    NearbyQuery, ProEligibilityRequest, ProEligibilityResponse, PublicClinic,
};
use crate::routes::{validation_failed, AppState};
use crate::services::{CacheKey, FirestoreError};

/// Configure clinic directory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/clinics/nearby", web::get().to(nearby_clinics))
        .route("/clinics/eligibility", web::post().to(pro_eligibility))
        .route("/clinics/{public_id}", web::get().to(get_clinic));
}

/// Health check endpoint, with directory cache statistics
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache: state.cache.stats(),
    })
}

fn upstream_failed(context: &str, e: FirestoreError) -> HttpResponse {
    tracing::error!("{}: {}", context, e);
    HttpResponse::BadGateway().json(ErrorResponse {
        error: context.to_string(),
        message: e.to_string(),
        status_code: 502,
    })
}

/// Published clinics, served from cache when fresh
async fn load_published_clinics(state: &AppState) -> Result<Vec<PublicClinic>, FirestoreError> {
    let key = CacheKey::published_clinics();
    if let Ok(clinics) = state.cache.get::<Vec<PublicClinic>>(&key).await {
        return Ok(clinics);
    }

    let clinics = state.firestore.fetch_published_clinics().await?;
    if let Err(e) = state.cache.set(&key, &clinics).await {
        tracing::warn!("Failed to cache published clinics: {}", e);
    }

    Ok(clinics)
}

/// Nearby clinics endpoint
///
/// GET /api/v1/clinics/nearby?lat=24.71&lng=46.67&radiusKm=25&limit=20
///
/// Without `lat`/`lng` clinics are returned in directory order.
async fn nearby_clinics(
    state: web::Data<AppState>,
    req: web::Query<NearbyClinicsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let origin = match (req.lat, req.lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
        _ => None,
    };
    let limit = req
        .limit
        .unwrap_or(state.discovery.default_limit)
        .min(state.discovery.max_limit) as usize;

    let clinics = match load_published_clinics(&state).await {
        Ok(clinics) => clinics,
        Err(e) => return upstream_failed("Failed to fetch clinics", e),
    };

    let query = NearbyQuery {
        origin,
        radius_km: req.radius_km,
        limit,
    };
    let result = state.directory.rank(clinics, &query);

    tracing::info!(
        "Returning {} clinics (from {} published, origin: {:?})",
        result.clinics.len(),
        result.total_candidates,
        origin
    );

    HttpResponse::Ok().json(NearbyClinicsResponse {
        clinics: result.clinics,
        total_results: result.total_candidates,
    })
}

/// Single published clinic
///
/// GET /api/v1/clinics/{publicId}
async fn get_clinic(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let public_id = path.into_inner();
    let key = CacheKey::clinic(&public_id);

    let clinic = match state.cache.get::<PublicClinic>(&key).await {
        Ok(clinic) => Some(clinic),
        Err(_) => match state.firestore.fetch_published_clinic(&public_id).await {
            Ok(Some(clinic)) => {
                if let Err(e) = state.cache.set(&key, &clinic).await {
                    tracing::warn!("Failed to cache clinic {}: {}", public_id, e);
                }
                Some(clinic)
            }
            Ok(None) => None,
            Err(e) => return upstream_failed("Failed to fetch clinic", e),
        },
    };

    let Some(clinic) = clinic else {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Clinic not found".to_string(),
            message: format!("No published clinic with id {}", public_id),
            status_code: 404,
        });
    };

    let query = NearbyQuery {
        origin: None,
        radius_km: None,
        limit: 1,
    };
    match state.directory.rank(vec![clinic], &query).clinics.pop() {
        Some(ranked) => HttpResponse::Ok().json(ranked),
        None => HttpResponse::InternalServerError().finish(),
    }
}

/// Pro eligibility endpoint
///
/// POST /api/v1/clinics/eligibility
///
/// Request body:
/// ```json
/// {
///   "averageRating": 4.7,
///   "reviewCount": 85,
///   "reviews": [{ "rating": 5, "text": "string" }]
/// }
/// ```
async fn pro_eligibility(req: web::Json<ProEligibilityRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let result = compute_pro_eligibility(req.average_rating, req.review_count, &req.reviews);
    let status = eligibility_status(result.score);

    tracing::debug!(
        "Pro eligibility: score={:.1}, eligible={}, reviews={}",
        result.score,
        result.is_eligible,
        req.reviews.len()
    );

    HttpResponse::Ok().json(ProEligibilityResponse { result, status })
}
