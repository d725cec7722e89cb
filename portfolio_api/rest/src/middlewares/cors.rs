use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn add<S: Clone + Send + Sync + 'static>(
    allowed_origins: Vec<HeaderValue>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    |router| {
        if allowed_origins.is_empty() {
            return router;
        }

        router.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
    }
}
