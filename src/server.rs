/// HTTP server setup and routing
use crate::{
    api::middleware::resolve_session,
    context::AppContext,
    error::{StratusError, StratusResult},
    serializer::{response::CODE_NOT_FOUND, Response},
};
use axum::{
    http::{header, Method, StatusCode},
    middleware, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Build the main application router
pub fn build_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(crate::api::routes())
        .fallback(not_found)
        .with_state(ctx.clone())
        // Runs before the per-route login guard
        .layer(middleware::from_fn_with_state(ctx, resolve_session))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// 404 handler
async fn not_found() -> (StatusCode, Response) {
    (
        StatusCode::NOT_FOUND,
        Response::err(CODE_NOT_FOUND, "Endpoint not found", None),
    )
}

/// Start the HTTP server
pub async fn serve(ctx: AppContext) -> StratusResult<()> {
    let addr = ctx.config.bind_addr();

    info!("Stratus listening on {}", addr);
    info!("   Service URL: {}", ctx.service_url());

    let app = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StratusError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| StratusError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
