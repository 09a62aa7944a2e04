use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use pergola_backend_model::{branch::BranchRef, object::ObjectRecord};
use pergola_backend_service::{BackendServices, object::NewObject};
use pergola_veranda_api_model::object::ApiObjectInfo;

use super::error::ApiResult;

pub async fn create_object(
	State(backend): State<BackendServices>,
	Json(info): Json<NewObject>,
) -> ApiResult<(StatusCode, Json<ApiObjectInfo>)> {
	let id = backend.object.create(info.clone()).await?;
	Ok((
		StatusCode::CREATED,
		Json(ApiObjectInfo {
			id,
			branch_id: info.branch_id,
			object_type_id: info.object_type_id,
			name: info.name,
			area: info.area,
			description: info.description,
		}),
	))
}

pub async fn list_branch_objects(
	State(backend): State<BackendServices>,
	Path(branch): Path<BranchRef>,
) -> ApiResult<Json<Vec<ApiObjectInfo>>> {
	let objects = backend.object.objects_of_branch(branch).await?;
	Ok(Json(objects.into_iter().map(object_to_api).collect()))
}

fn object_to_api(record: ObjectRecord) -> ApiObjectInfo {
	ApiObjectInfo {
		id: record.id,
		branch_id: record.branch,
		object_type_id: record.object_type,
		name: record.name,
		area: record.area,
		description: record.description,
	}
}
