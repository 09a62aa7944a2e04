use serde::{Deserialize, Serialize};

/// Kind of a file attached to a branch or to one of its objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
	/// A photograph of the grounds, taken on site.
	#[default]
	Photo,
	/// A measured diagram of the territory.
	Diagram,
	/// A maintenance or landscaping plan document.
	Plan,
}
