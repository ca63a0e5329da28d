use crate::cli::Args;
use http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub fn layer(args: &Args) -> CorsLayer {
    let allowed_origins = args
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .expect("Failed to parse an allowed origin.")
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_headers([
            "User-Agent".parse().unwrap(),
            "Sec-Fetch-Mode".parse().unwrap(),
            "Referer".parse().unwrap(),
            "Origin".parse().unwrap(),
            "Access-Control-Request-Method".parse().unwrap(),
            "Access-Control-Request-Headers".parse().unwrap(),
            "content-type".parse().unwrap(),
            "Passcode".parse().unwrap(),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
