use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::error::RelayError;
use crate::web::models::ChatRequest;
use crate::AppState;

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, RelayError> {
    let response = data.relay.handle_chat(req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
