use serde::{Deserialize, Serialize};

use crate::{maintenance::ApiPlanInfo, work::ApiWorkInfo};

/// Reply of the assistant query endpoint.
///
/// Always delivered with HTTP 200; the `status` field is the only
/// success/failure signal the endpoint exposes.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApiAssistantReply {
	/// The query was routed and answered, possibly with an empty
	/// record set.
	Success {
		data: ApiAssistantData,
		message: String,
	},
	/// The query matched no intent or named no branch.
	NotFound { message: String },
	/// A routed fetch failed underneath the assistant.
	Error { message: String },
}

/// Records carried by a successful reply.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiAssistantData {
	Plans(Vec<ApiPlanInfo>),
	CompletedWorks(Vec<ApiWorkInfo>),
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_reply_wire_shape() {
		let reply = ApiAssistantReply::Success {
			data: ApiAssistantData::Plans(vec![]),
			message: "Планы обслуживания для филиала 5".to_string(),
		};
		assert_eq!(
			serde_json::to_value(&reply).unwrap(),
			json!({
				"status": "success",
				"data": [],
				"message": "Планы обслуживания для филиала 5",
			})
		);

		let reply = ApiAssistantReply::NotFound {
			message: "Не удалось обработать запрос. Уточните параметры поиска.".to_string(),
		};
		let value = serde_json::to_value(&reply).unwrap();
		assert_eq!(value["status"], "not_found");
		assert!(value.get("data").is_none());
	}
}
