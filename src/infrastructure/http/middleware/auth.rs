use crate::application::services::{TemplateService, UserService};
use crate::domain::entities::User;
use crate::infrastructure::http::middleware::error::ApiError;
use axum::{
    extract::{Query, Request, State},
    http::header::{HeaderMap, AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

#[derive(Clone)]
pub struct AppState {
    pub template_service: TemplateService,
    pub user_service: UserService,
}

/// The caller resolved from its API key. Every template call is scoped to `user.id`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

#[derive(Debug, Deserialize)]
struct ApiKeyQuery {
    api_key: Option<String>,
}

/// Supports, in order of priority:
/// 1. `X-API-Key` header
/// 2. `Authorization: Bearer <key>`
/// 3. `api_key` query parameter
fn extract_api_key(request: &Request) -> Option<String> {
    let headers: &HeaderMap = request.headers();

    if let Some(key) = headers.get("X-API-Key").and_then(|v| v.to_str().ok()) {
        return Some(key.to_string());
    }

    if let Some(key) = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(key.trim().to_string());
    }

    Query::<ApiKeyQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(q)| q.api_key)
}

pub async fn require_api_key(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let api_key = extract_api_key(&request)
        .filter(|k| !k.is_empty())
        .ok_or(ApiError::Unauthorized)?;

    let user = match state.user_service.get_user_by_api_key(&api_key).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            let prefix: String = api_key.chars().take(8).collect();
            tracing::debug!("Unknown API key: {}", prefix);
            return Err(ApiError::Unauthorized);
        }
        Err(e) => {
            tracing::error!("API key lookup failed: {}", e);
            return Err(e.into());
        }
    };

    request.extensions_mut().insert(AuthenticatedUser { user });
    Ok(next.run(request).await)
}
