use web_sys::window;

use shared::{SpinTimings, constants::SPIN_REQUEST_TIMEOUT_MS};

const DEV_API_BASE_URL: &str = "http://127.0.0.1:8001";
// trunk serve's default port; the API runs separately during development
const DEV_FRONTEND_PORT: &str = "8080";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let (Ok(host), Ok(port)) = (location.host(), location.port()) {
            if port == DEV_FRONTEND_PORT {
                return DEV_API_BASE_URL.to_string();
            }
            // Served next to the API, so keep the page's own origin
            let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    DEV_API_BASE_URL.to_string()
}

pub fn api_url(endpoint: &str) -> String {
    format!("{}{}", get_api_base_url(), endpoint)
}

/// The browser never waits forever on the selection service
pub fn spin_timings() -> SpinTimings {
    SpinTimings::default().with_request_timeout(SPIN_REQUEST_TIMEOUT_MS)
}
