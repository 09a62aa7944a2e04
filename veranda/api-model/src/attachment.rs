use pergola_common_model::attachment::AttachmentKind;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ApiAttachmentInfo {
	pub id: i64,
	pub object_id: Option<i64>,
	pub file_type: AttachmentKind,
	pub file_url: String,
	pub uploaded_at: PrimitiveDateTime,
}

/// Response of a successful upload.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ApiUploadReceipt {
	/// Name the file was uploaded under.
	pub filename: String,
	/// Path the file is stored at.
	pub location: String,
}
