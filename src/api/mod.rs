/// API routes and handlers
pub mod middleware;
pub mod site;
pub mod user;

use crate::context::AppContext;
use axum::Router;

/// Build API routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .merge(site::routes())
        .merge(user::routes())
}
