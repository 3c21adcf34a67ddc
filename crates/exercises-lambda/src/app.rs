use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::any;
use exercises_storage::objects::UrlSigner;
use exercises_storage::records::RecordStore;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;
use crate::{middleware, response, routes};

/// Build the router for the exercises endpoint family.
///
/// Routes accept every method so that non-GET requests get an
/// `INVALID_METHOD` envelope instead of axum's bare 405.
pub fn router<S, U>(state: AppState<S, U>) -> Router
where
    S: RecordStore,
    U: UrlSigner,
{
    let mut app = Router::new()
        .route("/exercises", any(routes::exercises::list_exercises::<S, U>))
        .route("/exercises/", any(routes::exercises::list_exercises::<S, U>))
        .route(
            "/exercises/{exercise_id}",
            any(routes::exercises::get_exercise::<S, U>),
        )
        .fallback(routes::exercises::route_not_found)
        .layer(CatchPanicLayer::custom(response::panic_response))
        .layer(axum_mw::from_fn(middleware::audit::audit_log));

    for (name, value) in response::fixed_headers() {
        app = app.layer(SetResponseHeaderLayer::overriding(name, value));
    }

    app.with_state(state)
}
