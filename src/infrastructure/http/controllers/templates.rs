use crate::{
    domain::entities::Template,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState, AuthenticatedUser},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteTemplateResponse {
    pub success: bool,
    pub message: String,
}

pub async fn list_templates(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<Template>>> {
    let templates = state.template_service.list(auth_user.user.id).await?;
    Ok(Json(templates))
}

pub async fn get_template(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Template>> {
    let Path(id) = path?;
    let template = state.template_service.get(id, auth_user.user.id).await?;
    Ok(Json(template))
}

pub async fn create_template(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    body: Result<Json<Template>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Template>)> {
    let Json(mut template) = body?;
    template.user_id = auth_user.user.id;
    let template = state.template_service.create(template).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// Full replacement: the body must carry every field of the template.
pub async fn update_template(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Template>, JsonRejection>,
) -> ApiResult<Json<Template>> {
    let Path(id) = path?;
    let Json(mut template) = body?;
    if template.id != 0 && template.id != id {
        return Err(ApiError::BadRequest(
            "Template id does not match the request path".to_string(),
        ));
    }

    template.id = id;
    template.user_id = auth_user.user.id;
    let template = state.template_service.update(template).await?;
    Ok(Json(template))
}

pub async fn delete_template(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteTemplateResponse>> {
    let Path(id) = path?;
    // Delete itself is a no-op for unknown ids, so report 404 up front
    state.template_service.get(id, auth_user.user.id).await?;
    state.template_service.delete(id, auth_user.user.id).await?;

    Ok(Json(DeleteTemplateResponse {
        success: true,
        message: "Template deleted successfully".to_string(),
    }))
}
