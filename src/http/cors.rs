use crate::cli::Args;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn layer(args: &Args) -> CorsLayer {
    let origins = args
        .allowed_origins
        .iter()
        .filter_map(
            |origin| match HeaderValue::from_str(&origin.origin().ascii_serialization()) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!("Skipping allowed origin `{origin}`: {err}.");
                    None
                }
            },
        )
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
