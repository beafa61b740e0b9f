/// Current-user endpoints
use crate::{
    api::middleware::{require_login, CurrentUser},
    context::AppContext,
    serializer::{
        build_user_response, build_user_storage_response, Response, StorageView, UserView,
    },
};
use axum::{extract::State, middleware, routing::get, Extension, Router};

/// Build user routes; every route requires a session
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/api/v3/user/me", get(me))
        .route("/api/v3/user/storage", get(storage))
        .route_layer(middleware::from_fn(require_login))
}

/// Full profile of the logged-in account
async fn me(
    State(ctx): State<AppContext>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Response<UserView> {
    build_user_response(&user, ctx.store.as_ref(), ctx.hashid.as_ref())
}

/// Storage quota summary of the logged-in account
async fn storage(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Response<StorageView> {
    build_user_storage_response(&user)
}
