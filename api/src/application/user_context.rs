use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use uuid::Uuid;

/// Caller identity stored in request extensions. Authentication itself is
/// delegated to the hosted auth provider in front of this service; the
/// gateway forwards the authenticated subject in the `x-user-id` header.
#[derive(Clone, Copy, Debug)]
pub struct UserContext {
    pub user_id: Uuid,
}

/// Middleware resolving the `x-user-id` header into a [`UserContext`].
/// Requests without a parseable user id are rejected before any handler
/// runs.
pub async fn user_context_middleware(
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let user_id = req
        .headers()
        .get("x-user-id")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(UserContext { user_id });

    Ok(next.run(req).await)
}
