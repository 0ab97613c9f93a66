use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let generator = state.pipeline.generator_info();
    let policy = state.pipeline.policy();

    HttpResponse::Ok().json(serde_json::json!({
        "status": "ready",
        "version": env!("CARGO_PKG_VERSION"),
        "generator": generator,
        "min_text_chars": policy.min_text_chars,
        "max_prompt_text_chars": policy.max_prompt_text_chars,
    }))
}
