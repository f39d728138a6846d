//! API middleware components

pub mod logging;
pub mod metrics;
pub mod user_auth;

use axum::{body::Body, extract::MatchedPath, http::Request};

pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
pub use user_auth::RequireUser;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Route template of the request (e.g. `/projects/{pid}`), so ids stay out of
/// log fields and metric labels
pub(crate) fn matched_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_path_label() {
        let request = Request::builder()
            .uri("/projects/p1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(matched_path(&request), "unmatched");
    }
}
