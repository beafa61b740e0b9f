/// Session hand-off and login guard
use crate::{context::AppContext, models::User, serializer::check_login};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Account attached to the request by `resolve_session`
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Arc<User>);

/// Numeric user id asserted by the fronting proxy
pub fn session_user_id(headers: &HeaderMap, header: &str) -> Option<u64> {
    headers
        .get(header)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

/// Load the asserted account and add it to extensions
pub async fn resolve_session(
    State(ctx): State<AppContext>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(uid) = session_user_id(req.headers(), &ctx.config.session.user_header) {
        match ctx.store.get_user(uid) {
            Ok(Some(user)) => {
                req.extensions_mut().insert(CurrentUser(Arc::new(user)));
            }
            Ok(None) => {
                // Stale session - continue anonymously
                tracing::debug!("Session refers to unknown user {}", uid);
            }
            Err(e) => {
                // Public routes still answer; guarded ones see no session
                tracing::warn!("Failed to load session user {}: {}", uid, e);
            }
        }
    }

    next.run(req).await
}

/// Reject requests without a session
pub async fn require_login(req: Request, next: Next) -> Response {
    if req.extensions().get::<CurrentUser>().is_none() {
        return check_login().into_response();
    }

    next.run(req).await
}
