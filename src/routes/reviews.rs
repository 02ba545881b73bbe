use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::calculate_review_quality;
use crate::models::ReviewQualityRequest;
use crate::routes::validation_failed;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/reviews/quality", web::post().to(review_quality));
}

/// Review quality endpoint
///
/// POST /api/v1/reviews/quality
///
/// Request body:
/// ```json
/// { "rating": 4, "text": "string" }
/// ```
/// `textLength` may be sent instead of `text`.
async fn review_quality(req: web::Json<ReviewQualityRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(calculate_review_quality(req.rating, req.resolved_length()))
}
