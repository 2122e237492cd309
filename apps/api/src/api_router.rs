use axum::Router;
use axum::routing::get;
use parkwatch_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;


pub fn build_router(app_state: AppState, cors_origin: &str) -> Result<Router, AppError> {
    let facility_routes = Router::new()
        .route(
            "/api/facilities",
            get(handlers::facilities::list_facilities_handler),
        )
        .route(
            "/api/facilities/{facility_id}/occupation",
            get(handlers::facilities::facility_occupation_handler),
        )
        .route(
            "/api/facilities/{facility_id}/capacity",
            get(handlers::facilities::facility_capacity_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(facility_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(cors_origin)?)
        .with_state(app_state))
}
