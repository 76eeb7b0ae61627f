use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use shared::{
    CreateCustomListRequest, CustomFoodList, CustomListsResponse, HealthResponse, PremadeList,
    PremadeListsResponse, ThemesResponse,
};
use tracing::{debug, warn};
use validator::Validate;

use crate::catalog::{PREMADE, WHEEL_THEMES};
use crate::error::ApiError;
use crate::AppState;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Food Roulette API is running!".to_string(),
    })
}

pub async fn premade_lists_handler() -> Json<PremadeListsResponse> {
    Json(PREMADE.clone())
}

pub async fn premade_list_handler(Path(category): Path<String>) -> Result<Json<PremadeList>, ApiError> {
    debug!("Looking up premade list {:?}", category);
    PREMADE
        .lists
        .get(&category)
        .cloned()
        .map(Json)
        .ok_or(ApiError::CategoryNotFound(category))
}

pub async fn themes_handler() -> Json<ThemesResponse> {
    Json(ThemesResponse { themes: WHEEL_THEMES.clone() })
}

pub async fn create_custom_list_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomListRequest>,
) -> Result<(StatusCode, Json<CustomFoodList>), ApiError> {
    if let Err(errors) = request.validate() {
        warn!("Rejected custom list {:?}: {}", request.name, errors);
        return Err(errors.into());
    }
    let list = state.custom_lists.create(request).await;
    Ok((StatusCode::CREATED, Json(list)))
}

pub async fn custom_lists_handler(State(state): State<AppState>) -> Json<CustomListsResponse> {
    Json(CustomListsResponse { lists: state.custom_lists.all().await })
}
