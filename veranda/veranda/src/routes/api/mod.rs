use axum::{
	Router,
	routing::{get, post, put},
};
use pergola_backend_service::BackendServices;

mod assistant;
mod attachment;
mod branch;
pub mod error;
mod maintenance;
mod object;
mod work;

pub fn api_router() -> Router<BackendServices> {
	Router::new()
		.route("/", get(handler))
		.route(
			"/branches",
			post(branch::create_branch).get(branch::search_branches),
		)
		.route("/branches/{branch}", put(branch::update_branch))
		.route("/branches/{branch}/objects", get(object::list_branch_objects))
		.route(
			"/branches/{branch}/plans",
			get(maintenance::list_branch_plans),
		)
		.route(
			"/branches/{branch}/completed-works",
			get(work::list_branch_works),
		)
		.route(
			"/branches/{branch}/attachments",
			get(attachment::list_branch_attachments),
		)
		.route("/objects", post(object::create_object))
		.route("/maintenance", post(maintenance::create_plan))
		.route("/completed-works", post(work::create_work))
		.route("/attachments", post(attachment::upload_attachment))
		.route("/nlp-query", get(assistant::nlp_query))
}

async fn handler() -> &'static str {
	concat!("Pergola Veranda ", env!("CARGO_PKG_VERSION"))
}
