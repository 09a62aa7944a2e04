use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use pergola_backend_model::{branch::BranchRef, work::WorkRecord};
use pergola_backend_service::{BackendServices, work::NewWork};
use pergola_veranda_api_model::work::ApiWorkInfo;

use super::error::ApiResult;

pub async fn create_work(
	State(backend): State<BackendServices>,
	Json(work): Json<NewWork>,
) -> ApiResult<(StatusCode, Json<ApiWorkInfo>)> {
	let id = backend.work_log.create(work.clone()).await?;
	Ok((
		StatusCode::CREATED,
		Json(ApiWorkInfo {
			id,
			branch_id: work.branch_id,
			object_id: work.object_id,
			work_type: work.work_type,
			completion_date: work.completion_date,
			responsible_person: work.responsible_person,
			notes: work.notes,
		}),
	))
}

pub async fn list_branch_works(
	State(backend): State<BackendServices>,
	Path(branch): Path<BranchRef>,
) -> ApiResult<Json<Vec<ApiWorkInfo>>> {
	let works = backend.work_log.works_of_branch(branch).await?;
	Ok(Json(works.into_iter().map(work_to_api).collect()))
}

pub(super) fn work_to_api(record: WorkRecord) -> ApiWorkInfo {
	ApiWorkInfo {
		id: record.id,
		branch_id: record.branch,
		object_id: record.object,
		work_type: record.work_type,
		completion_date: record.completed_at,
		responsible_person: record.responsible,
		notes: record.notes,
	}
}
