use axum::{Router, routing::get};
use pergola_backend_service::BackendServices;

mod api;

pub fn make_router(backend_services: BackendServices) -> Router {
	Router::new()
		.route("/", get(handler))
		.nest("/api", api::api_router())
		.with_state(backend_services)
}

async fn handler() -> &'static str {
	concat!("Pergola Veranda ", env!("CARGO_PKG_VERSION"))
}
