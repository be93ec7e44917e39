use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

/// Readiness endpoint probed by a peer instance at startup.
#[get("/q/health/ready")]
pub async fn health_ready() -> impl Responder {
	HttpResponse::Ok().json(json!({
		"status": "UP",
		"checks": ["local"],
	}))
}
