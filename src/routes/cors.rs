use actix_web::HttpResponse;

use crate::routes::ErrorBody;

/// Answers the browser's preflight before a cross-origin POST. The CORS
/// headers themselves are added by middleware.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorBody::new("Method not allowed"))
}
