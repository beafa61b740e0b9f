/// Site-level endpoints
use crate::{context::AppContext, serializer::Response};
use axum::{extract::State, routing::get, Router};

pub fn routes() -> Router<AppContext> {
    Router::new().route("/api/v3/site/ping", get(ping))
}

/// Liveness check reporting the backend version
async fn ping(State(ctx): State<AppContext>) -> Response<String> {
    Response::success(ctx.config.service.version.clone())
}
