use axum::{
	Json,
	extract::{
		Multipart, Path, Query, State,
		multipart::MultipartError,
	},
	http::StatusCode,
};
use pergola_backend_model::{
	attachment::{AttachmentRecord, SqlAttachmentKind},
	branch::BranchRef,
	object::ObjectRef,
};
use pergola_backend_service::{BackendServices, attachment::NewAttachment};
use pergola_common_model::attachment::AttachmentKind;
use pergola_veranda_api_model::attachment::{ApiAttachmentInfo, ApiUploadReceipt};
use serde::Deserialize;

use super::error::{ApiError, ApiResult, OptionExt};

#[derive(Debug, Deserialize)]
pub struct UploadParams {
	pub branch_id: BranchRef,
	pub object_id: Option<ObjectRef>,
	#[serde(default)]
	pub file_type: AttachmentKind,
}

pub async fn upload_attachment(
	State(backend): State<BackendServices>,
	Query(params): Query<UploadParams>,
	mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<ApiUploadReceipt>)> {
	let mut file = None;
	while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
		if field.name() == Some("file") {
			let name = field.file_name().unwrap_or("file").to_owned();
			let data = field.bytes().await.map_err(invalid_multipart)?;
			file = Some((name, data));
			break;
		}
	}
	let (name, data) = file.or_api_error(StatusCode::BAD_REQUEST, "missing file field")?;

	let record = backend
		.attachment
		.store(
			NewAttachment {
				branch: params.branch_id,
				object: params.object_id,
				kind: params.file_type,
			},
			&name,
			&data,
		)
		.await?;

	Ok((
		StatusCode::CREATED,
		Json(ApiUploadReceipt {
			filename: name,
			location: record.file_path,
		}),
	))
}

fn invalid_multipart(err: MultipartError) -> ApiError {
	ApiError::CustomString(StatusCode::BAD_REQUEST, err.to_string())
}

pub async fn list_branch_attachments(
	State(backend): State<BackendServices>,
	Path(branch): Path<BranchRef>,
) -> ApiResult<Json<Vec<ApiAttachmentInfo>>> {
	let attachments = backend.attachment.attachments_of_branch(branch).await?;
	Ok(Json(attachments.into_iter().map(attachment_to_api).collect()))
}

fn attachment_to_api(record: AttachmentRecord) -> ApiAttachmentInfo {
	ApiAttachmentInfo {
		id: record.id,
		object_id: record.object,
		file_type: AttachmentKind::from(SqlAttachmentKind::from(record.kind)),
		file_url: record.file_path,
		uploaded_at: record.uploaded_at,
	}
}
