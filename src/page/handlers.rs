use crate::app_context::AppContext;
use crate::geo::consts::DESTINATION_DELTA_MILES;
use crate::page::responses::ConfigResponse;
use crate::sessions::storage::HashMapSessionStorage;
use axum::extract::State;
use axum::response::{Html, Json};

static INDEX_HTML: &str = include_str!("../../static/index.html");

#[axum::debug_handler]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[axum::debug_handler]
pub async fn config(
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Json<ConfigResponse> {
    let options = app_context.position_options;
    Json(ConfigResponse {
        timeout_ms: u64::try_from(options.timeout.as_millis()).unwrap_or(u64::MAX),
        max_accuracy_meters: options.max_accuracy_meters,
        destination_delta_miles: DESTINATION_DELTA_MILES,
    })
}
