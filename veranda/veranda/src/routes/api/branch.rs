use axum::{
	Json,
	extract::{Path, Query, State},
	http::StatusCode,
};
use diesel::{ExpressionMethods, QueryDsl};
use pergola_backend_model::{
	branch::{BranchRecord, BranchRef},
	db::{schema::branch::dsl, utils::WherePredicate},
};
use pergola_backend_service::{
	BackendServices,
	branch::{BranchPatch, NewBranch},
	database::SqlConnRef,
};
use pergola_veranda_api_model::branch::ApiBranchInfo;
use serde::Deserialize;

use super::error::ApiResult;

pub async fn create_branch(
	State(backend): State<BackendServices>,
	Json(info): Json<NewBranch>,
) -> ApiResult<(StatusCode, Json<ApiBranchInfo>)> {
	let id = backend.branch.create(info).await?;

	let mut db = backend.database.get().await?;
	Ok((
		StatusCode::CREATED,
		fetch_branch(&mut db, dsl::id.eq(id)).await?,
	))
}

pub async fn update_branch(
	State(backend): State<BackendServices>,
	Path(branch): Path<BranchRef>,
	Json(patch): Json<BranchPatch>,
) -> ApiResult<Json<ApiBranchInfo>> {
	backend.branch.update(branch, patch).await?;

	let mut db = backend.database.get().await?;
	fetch_branch(&mut db, dsl::id.eq(branch)).await
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
	#[serde(default)]
	search: String,
}

pub async fn search_branches(
	State(backend): State<BackendServices>,
	Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<ApiBranchInfo>>> {
	let found = backend.branch.search(&params.search).await?;
	Ok(Json(found.into_iter().map(branch_to_api).collect()))
}

async fn fetch_branch<F: WherePredicate<dsl::branch>>(
	db: &mut SqlConnRef,
	filter: F,
) -> ApiResult<Json<ApiBranchInfo>> {
	let record: BranchRecord = db
		.load_one_select(dsl::branch.limit(1).filter(filter))
		.await?;
	Ok(Json(branch_to_api(record)))
}

fn branch_to_api(record: BranchRecord) -> ApiBranchInfo {
	ApiBranchInfo {
		id: record.id,
		address: record.address,
		internal_code: record.internal_code,
		latitude: record.latitude,
		longitude: record.longitude,
	}
}
