use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::time::Instant;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

/// Which part of the server a path belongs to.
fn surface(path: &str) -> &'static str {
    if path.starts_with("/api/auth") {
        "auth"
    } else if path.starts_with("/admin") {
        "admin"
    } else if path.starts_with("/swagger-ui") || path.starts_with("/api-docs") {
        "docs"
    } else {
        "other"
    }
}

fn completion_level(status: u16) -> Level {
    match status {
        500..=599 => Level::ERROR,
        400..=499 => Level::WARN,
        _ => Level::INFO,
    }
}

/// Logs each request once it completes, tagged with the surface it hit and
/// whether it carried a session cookie. The level follows the status.
pub async fn logging_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let surface = surface(&path);
    let has_session = CookieJar::from_headers(req.headers())
        .get(state.sessions.cookie_name())
        .is_some();
    let request_id = uuid::Uuid::new_v4();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    let level = completion_level(status);
    if level == Level::ERROR {
        error!(
            %request_id,
            %method,
            %path,
            surface,
            has_session,
            status,
            latency_ms,
            "Server error"
        );
    } else if level == Level::WARN {
        warn!(
            %request_id,
            %method,
            %path,
            surface,
            has_session,
            status,
            latency_ms,
            "Client error"
        );
    } else {
        info!(
            %request_id,
            %method,
            %path,
            surface,
            has_session,
            status,
            latency_ms,
            "Request completed"
        );
    }

    response
}

/// Installs the global subscriber.
///
/// - **Level**: `RUST_LOG` if set, otherwise `LOG_LEVEL` (default "info") for
///   this crate with noisy dependencies held at warn
/// - **Format**: compact console lines, or JSON when `LOG_FORMAT=json`
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{name}={level},sickfits_cli={level},sickfits_db={level},tower_http=warn,hyper=warn,sqlx=warn",
            name = env!("CARGO_CRATE_NAME"),
            level = log_level
        ))
    });

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let console_layer = if json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry().with(console_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_by_path() {
        assert_eq!(surface("/api/auth/signin"), "auth");
        assert_eq!(surface("/admin/api/lists"), "admin");
        assert_eq!(surface("/swagger-ui/index.html"), "docs");
        assert_eq!(surface("/api-docs/openapi.json"), "docs");
        assert_eq!(surface("/favicon.ico"), "other");
    }

    #[test]
    fn test_level_follows_status() {
        assert_eq!(completion_level(200), Level::INFO);
        assert_eq!(completion_level(204), Level::INFO);
        assert_eq!(completion_level(401), Level::WARN);
        assert_eq!(completion_level(503), Level::ERROR);
    }
}
