use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use pergola_backend_model::{branch::BranchRef, maintenance::PlanRecord};
use pergola_backend_service::{BackendServices, maintenance::NewPlan};
use pergola_veranda_api_model::maintenance::ApiPlanInfo;

use super::error::ApiResult;

pub async fn create_plan(
	State(backend): State<BackendServices>,
	Json(plan): Json<NewPlan>,
) -> ApiResult<(StatusCode, Json<ApiPlanInfo>)> {
	let id = backend.maintenance.create(plan.clone()).await?;
	Ok((
		StatusCode::CREATED,
		Json(ApiPlanInfo {
			id,
			branch_id: plan.branch_id,
			object_id: plan.object_id,
			work_type: plan.work_type,
			frequency: plan.frequency,
			next_maintenance_date: plan.next_maintenance_date,
		}),
	))
}

pub async fn list_branch_plans(
	State(backend): State<BackendServices>,
	Path(branch): Path<BranchRef>,
) -> ApiResult<Json<Vec<ApiPlanInfo>>> {
	let plans = backend.maintenance.plans_of_branch(branch).await?;
	Ok(Json(plans.into_iter().map(plan_to_api).collect()))
}

pub(super) fn plan_to_api(record: PlanRecord) -> ApiPlanInfo {
	ApiPlanInfo {
		id: record.id,
		branch_id: record.branch,
		object_id: record.object,
		work_type: record.work_type,
		frequency: record.frequency,
		next_maintenance_date: record.next_due_at,
	}
}
