use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::constants::{
    CUSTOM_LISTS_ENDPOINT, HEALTH_ENDPOINT, PREMADE_LISTS_ENDPOINT, SPIN_ENDPOINT,
};
use shared::{
    CreateCustomListRequest, CustomFoodList, CustomListsResponse, ErrorResponse, FoodItem,
    HealthResponse, PremadeListsResponse, SpinError, SpinResult,
};

use crate::config::api_url;

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, SpinError> {
    if !response.ok() {
        // Prefer the service's own message when it sent one
        if let Ok(body) = response.json::<ErrorResponse>().await {
            log::warn!("Request failed with {}: {}", response.status(), body.error);
        }
        return Err(SpinError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| SpinError::Decode(e.to_string()))
}

pub async fn fetch_premade_lists() -> Result<PremadeListsResponse, SpinError> {
    let response = Request::get(&api_url(PREMADE_LISTS_ENDPOINT))
        .send()
        .await
        .map_err(|e| SpinError::Transport(e.to_string()))?;
    read_json(response).await
}

pub async fn post_spin(foods: &[FoodItem]) -> Result<SpinResult, SpinError> {
    let response = Request::post(&api_url(SPIN_ENDPOINT))
        .json(&foods)
        .map_err(|e| SpinError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SpinError::Transport(e.to_string()))?;
    read_json(response).await
}

pub async fn fetch_custom_lists() -> Result<Vec<CustomFoodList>, SpinError> {
    let response = Request::get(&api_url(CUSTOM_LISTS_ENDPOINT))
        .send()
        .await
        .map_err(|e| SpinError::Transport(e.to_string()))?;
    read_json::<CustomListsResponse>(response).await.map(|r| r.lists)
}

pub async fn save_custom_list(request: &CreateCustomListRequest) -> Result<CustomFoodList, SpinError> {
    let response = Request::post(&api_url(CUSTOM_LISTS_ENDPOINT))
        .json(request)
        .map_err(|e| SpinError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SpinError::Transport(e.to_string()))?;
    read_json(response).await
}

pub async fn fetch_health() -> Result<HealthResponse, SpinError> {
    let response = Request::get(&api_url(HEALTH_ENDPOINT))
        .send()
        .await
        .map_err(|e| SpinError::Transport(e.to_string()))?;
    read_json(response).await
}
