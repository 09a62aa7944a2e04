use diesel::{Queryable, Selectable};
use pergola_common_model::attachment::AttachmentKind;
use time::PrimitiveDateTime;

use crate::{branch::BranchRef, object::ObjectRef};

pub type AttachmentRef = i64;

/// Kind of an attached file.
///
/// Stored as a tiny unsigned column. Unknown values are decoded as photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SqlAttachmentKind {
	/// A photograph taken on site.
	#[default]
	Photo = 0,
	/// A measured diagram of the territory.
	Diagram = 1,
	/// A maintenance or landscaping plan document.
	Plan = 2,
}

impl From<u8> for SqlAttachmentKind {
	fn from(value: u8) -> Self {
		Self::from(value as i16)
	}
}

impl From<i16> for SqlAttachmentKind {
	fn from(value: i16) -> Self {
		match value {
			0 => Self::Photo,
			1 => Self::Diagram,
			2 => Self::Plan,
			_ => Self::Photo,
		}
	}
}

impl From<AttachmentKind> for SqlAttachmentKind {
	fn from(value: AttachmentKind) -> Self {
		match value {
			AttachmentKind::Photo => Self::Photo,
			AttachmentKind::Diagram => Self::Diagram,
			AttachmentKind::Plan => Self::Plan,
		}
	}
}

impl From<SqlAttachmentKind> for AttachmentKind {
	fn from(value: SqlAttachmentKind) -> Self {
		match value {
			SqlAttachmentKind::Photo => Self::Photo,
			SqlAttachmentKind::Diagram => Self::Diagram,
			SqlAttachmentKind::Plan => Self::Plan,
		}
	}
}

/// Stored record of a file attached to a branch or to one of its
/// objects. The file itself lives under the uploads root.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::branch_attachment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AttachmentRecord {
	pub id: AttachmentRef,
	pub branch: BranchRef,
	pub object: Option<ObjectRef>,
	pub kind: i16,
	pub file_path: String,
	pub uploaded_at: PrimitiveDateTime,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_kind_round_trip() {
		for kind in [
			AttachmentKind::Photo,
			AttachmentKind::Diagram,
			AttachmentKind::Plan,
		] {
			let sql = SqlAttachmentKind::from(kind);
			assert_eq!(AttachmentKind::from(SqlAttachmentKind::from(sql as i16)), kind);
		}
	}

	#[test]
	fn test_unknown_kind_decodes_as_photo() {
		assert_eq!(SqlAttachmentKind::from(42i16), SqlAttachmentKind::Photo);
	}
}
