use axum::http::{header, Method};
use axum::http::Request;
use axum::body::Body;
use axum::response::Response;
use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::games::backend_wheel_game::create_router as create_wheel_game_router;
use crate::handlers::{
    create_custom_list_handler, custom_lists_handler, health_check, premade_list_handler,
    premade_lists_handler, themes_handler,
};
use crate::services::food_list_service::CustomListStore;

mod catalog;
mod config;
mod error;
mod games;
mod handlers;
mod logging;
mod services;

#[derive(Clone, Default)]
pub struct AppState {
    custom_lists: CustomListStore,
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origin = if config.allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(config.allowed_origins.clone())
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

async fn log_request_middleware(request: Request<Body>, next: middleware::Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() || status.is_client_error() {
        warn!("{} {} -> {}", method, path, status);
    } else {
        info!("{} {} -> {}", method, path, status);
    }
    response
}

pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/premade-lists", get(premade_lists_handler))
        .route("/premade-lists/:category", get(premade_list_handler))
        .route("/custom-lists", get(custom_lists_handler).post(create_custom_list_handler))
        .route("/themes", get(themes_handler))
        .merge(create_wheel_game_router());

    Router::new()
        .nest("/api", api_routes)
        .layer(middleware::from_fn(log_request_middleware))
        .layer(cors_layer(config))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let config = ServerConfig::from_env();
    let app = app(AppState::default(), &config);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Food Roulette API listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use shared::{CustomFoodList, PremadeListsResponse, SpinResult};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState::default(), &ServerConfig::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(test_app(), get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_premade_lists_start_with_italian() {
        let (status, body) = send(test_app(), get_request("/api/premade-lists")).await;
        assert_eq!(status, StatusCode::OK);
        let lists: PremadeListsResponse = serde_json::from_value(body).unwrap();
        let (key, list) = lists.first_category().unwrap();
        assert_eq!(key, "italian");
        assert_eq!(list.name, "Italian Cuisine");
    }

    #[tokio::test]
    async fn test_single_premade_list_and_unknown_category() {
        let (status, body) = send(test_app(), get_request("/api/premade-lists/asian")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Asian Cuisine");

        let (status, body) = send(test_app(), get_request("/api/premade-lists/martian")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Category not found");
    }

    #[tokio::test]
    async fn test_spin_returns_submitted_item() {
        let foods = json!(["Pizza", "Sushi", "Tacos", "Pasta"]);
        let (status, body) = send(test_app(), post_json("/api/spin", foods)).await;
        assert_eq!(status, StatusCode::OK);

        let result: SpinResult = serde_json::from_value(body).unwrap();
        assert!(["Pizza", "Sushi", "Tacos", "Pasta"].contains(&result.selected_food.as_str()));
        assert_eq!(result.total_options, 4);
        assert!(!result.theme.colors.is_empty());
    }

    #[tokio::test]
    async fn test_spin_rejects_empty_and_blank_lists() {
        let (status, body) = send(test_app(), post_json("/api/spin", json!([]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No food items provided");

        let (status, _) = send(test_app(), post_json("/api/spin", json!(["Pho", "  "]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_custom_lists_round_trip_through_shared_state() {
        let app = test_app();
        let (status, body) = send(
            app.clone(),
            post_json("/api/custom-lists", json!({"name": "Friday", "items": ["Pho", "Curry"]})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: CustomFoodList = serde_json::from_value(body).unwrap();
        assert_eq!(created.items, vec!["Pho".to_string(), "Curry".to_string()]);

        let (status, body) = send(app, get_request("/api/custom-lists")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["lists"][0]["id"], created.id);
    }

    #[tokio::test]
    async fn test_custom_list_validation() {
        let (status, body) = send(
            test_app(),
            post_json("/api/custom-lists", json!({"name": "Empty", "items": []})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Items list cannot be empty");

        let (status, body) = send(
            test_app(),
            post_json("/api/custom-lists", json!({"name": " ", "items": ["Pho"]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "List name cannot be blank");
    }

    #[tokio::test]
    async fn test_themes_are_listed() {
        let (status, body) = send(test_app(), get_request("/api/themes")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["themes"].as_array().unwrap().len(), 5);
        assert_eq!(body["themes"][1]["wheelStyle"], "elegant");
    }
}
