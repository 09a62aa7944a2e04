use axum::{
	Json,
	extract::{Query, State},
};
use pergola_backend_service::{BackendServices, assistant::AssistantAnswer};
use pergola_veranda_api_model::assistant::{ApiAssistantData, ApiAssistantReply};
use serde::Deserialize;
use tracing::warn;

use super::{maintenance::plan_to_api, work::work_to_api};

#[derive(Debug, Deserialize)]
pub struct NlpParams {
	query: String,
}

/// Free-text query endpoint for the chat assistant.
///
/// Every outcome is an HTTP 200; the reply's status field carries
/// success, not_found, or error. Store failures are logged here and
/// never surface as transport errors.
pub async fn nlp_query(
	State(backend): State<BackendServices>,
	Query(params): Query<NlpParams>,
) -> Json<ApiAssistantReply> {
	let reply = match backend.assistant.answer(&params.query).await {
		Ok(AssistantAnswer::Plans { branch, plans }) => ApiAssistantReply::Success {
			data: ApiAssistantData::Plans(plans.into_iter().map(plan_to_api).collect()),
			message: format!("Планы обслуживания для филиала {branch}"),
		},
		Ok(AssistantAnswer::CompletedWorks { branch, works }) => ApiAssistantReply::Success {
			data: ApiAssistantData::CompletedWorks(
				works.into_iter().map(work_to_api).collect(),
			),
			message: format!("Выполненные работы по филиалу {branch}"),
		},
		Ok(AssistantAnswer::Unrecognized) => ApiAssistantReply::NotFound {
			message: "Не удалось обработать запрос. Уточните параметры поиска.".to_string(),
		},
		Err(err) => {
			warn!(%err, "assistant query failed");
			ApiAssistantReply::Error {
				message: "Не удалось выполнить поиск. Попробуйте позже.".to_string(),
			}
		}
	};
	Json(reply)
}
