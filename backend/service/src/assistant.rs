//! Keyword-driven query routing for the chat assistant.
//!
//! Queries arrive as free-form Russian text ("что планируется по ВСП
//! 8610?"). Routing is deterministic: a closed set of trigger words
//! picks the intent, and the branch is taken from the first run of
//! digits in the query. Anything else is answered as unrecognized.

use std::sync::Arc;

use pergola_backend_model::{branch::BranchRef, maintenance::PlanRecord, work::WorkRecord};

use crate::{Result, maintenance::MaintenanceService, work::WorkLogService};

/// Trigger words for the maintenance-plan intent.
const PLAN_KEYWORDS: &[&str] = &["планируется", "планы"];
/// Trigger words for the completed-work intent.
const COMPLETED_KEYWORDS: &[&str] = &["выполнено", "сделано"];

/// Purpose of a free-text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryIntent {
	/// The caller asks for scheduled maintenance.
	Plans,
	/// The caller asks for work already carried out.
	CompletedWorks,
}

/// Classifies a query by keyword containment.
///
/// The plan set is checked first, so a query carrying trigger words of
/// both intents resolves to [`QueryIntent::Plans`]. Matching is plain
/// substring containment over the lowercased query; there is no fuzzy
/// matching and no negation handling ("не выполнено" still matches the
/// completed-work set).
pub fn classify_query(query: &str) -> Option<QueryIntent> {
	let query = query.to_lowercase();

	if PLAN_KEYWORDS.iter().any(|kw| query.contains(kw)) {
		return Some(QueryIntent::Plans);
	}
	if COMPLETED_KEYWORDS.iter().any(|kw| query.contains(kw)) {
		return Some(QueryIntent::CompletedWorks);
	}

	None
}

/// Extracts the target branch as the first contiguous run of ASCII
/// digits in the query.
///
/// "филиал 12 и 34" targets branch 12. A query with no digits (or a
/// run that overflows an i64) yields `None`.
pub fn extract_branch_ref(query: &str) -> Option<BranchRef> {
	let start = query.find(|c: char| c.is_ascii_digit())?;
	let run = &query[start..];
	let end = run
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(run.len());
	run[..end].parse().ok()
}

/// Routed answer to a free-text query.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantAnswer {
	Plans {
		branch: BranchRef,
		plans: Vec<PlanRecord>,
	},
	CompletedWorks {
		branch: BranchRef,
		works: Vec<WorkRecord>,
	},
	/// No intent keyword matched, or no branch could be extracted.
	Unrecognized,
}

/// The assistant query router.
///
/// Fetches go through the same read services the plain list endpoints
/// use; the router adds nothing but classification and dispatch.
#[derive(Debug)]
pub struct AssistantService {
	maintenance: Arc<MaintenanceService>,
	work_log: Arc<WorkLogService>,
}

impl AssistantService {
	pub fn new(maintenance: Arc<MaintenanceService>, work_log: Arc<WorkLogService>) -> Self {
		Self {
			maintenance,
			work_log,
		}
	}

	/// Answers a free-text query.
	///
	/// An existing branch with zero matching records and an unknown
	/// branch both answer with an empty record set; the router does not
	/// tell them apart. Store failures propagate as errors and are
	/// turned into an error payload by the HTTP layer.
	pub async fn answer(&self, query: &str) -> Result<AssistantAnswer> {
		let Some(intent) = classify_query(query) else {
			return Ok(AssistantAnswer::Unrecognized);
		};
		let Some(branch) = extract_branch_ref(query) else {
			return Ok(AssistantAnswer::Unrecognized);
		};

		match intent {
			QueryIntent::Plans => Ok(AssistantAnswer::Plans {
				branch,
				plans: self.maintenance.plans_of_branch(branch).await?,
			}),
			QueryIntent::CompletedWorks => Ok(AssistantAnswer::CompletedWorks {
				branch,
				works: self.work_log.works_of_branch(branch).await?,
			}),
		}
	}
}

#[cfg(test)]
mod test {
	use time::macros::datetime;

	use super::*;
	use crate::{maintenance::NewPlan, test::test_env, work::NewWork};

	#[test]
	fn test_classify_plan_keywords() {
		assert_eq!(classify_query("какие планы по ВСП 5?"), Some(QueryIntent::Plans));
		assert_eq!(
			classify_query("что планируется в филиале 8610"),
			Some(QueryIntent::Plans)
		);
		// case-insensitive, Cyrillic included
		assert_eq!(classify_query("ПЛАНЫ 5"), Some(QueryIntent::Plans));
	}

	#[test]
	fn test_classify_completed_keywords() {
		assert_eq!(
			classify_query("что выполнено по филиалу 5"),
			Some(QueryIntent::CompletedWorks)
		);
		assert_eq!(
			classify_query("что сделано вчера, 5"),
			Some(QueryIntent::CompletedWorks)
		);
	}

	#[test]
	fn test_classify_tie_break_prefers_plans() {
		assert_eq!(
			classify_query("планы и выполнено 5"),
			Some(QueryIntent::Plans)
		);
	}

	#[test]
	fn test_classify_has_no_negation_handling() {
		assert_eq!(
			classify_query("не выполнено 7"),
			Some(QueryIntent::CompletedWorks)
		);
	}

	#[test]
	fn test_classify_unknown() {
		assert_eq!(classify_query("привет"), None);
		assert_eq!(classify_query(""), None);
	}

	#[test]
	fn test_extract_first_digit_run() {
		assert_eq!(extract_branch_ref("филиал 12 и 34"), Some(12));
		assert_eq!(extract_branch_ref("филиал 1 объект 2"), Some(1));
		assert_eq!(extract_branch_ref("8610"), Some(8610));
		assert_eq!(extract_branch_ref("без номера"), None);
		assert_eq!(extract_branch_ref(""), None);
		// a run too long for i64 is treated as absent
		assert_eq!(extract_branch_ref("99999999999999999999999"), None);
	}

	#[tokio::test]
	async fn test_answer_returns_plans_of_branch() {
		let env = test_env().await;
		env.maintenance
			.create(NewPlan {
				branch_id: 8610,
				object_id: None,
				work_type: "покос газона".to_string(),
				frequency: "еженедельно".to_string(),
				next_maintenance_date: datetime!(2026-06-01 09:00),
			})
			.await
			.unwrap();
		env.maintenance
			.create(NewPlan {
				branch_id: 1,
				object_id: None,
				work_type: "подметание".to_string(),
				frequency: "ежедневно".to_string(),
				next_maintenance_date: datetime!(2026-06-02 09:00),
			})
			.await
			.unwrap();

		let answer = env
			.assistant
			.answer("какие планы по филиалу 8610?")
			.await
			.unwrap();
		let AssistantAnswer::Plans { branch, plans } = answer else {
			panic!("expected a plan answer");
		};
		assert_eq!(branch, 8610);
		assert_eq!(plans.len(), 1);
		assert_eq!(plans[0].work_type, "покос газона");
	}

	#[tokio::test]
	async fn test_answer_returns_completed_works() {
		let env = test_env().await;
		env.work_log
			.create(NewWork {
				branch_id: 42,
				object_id: None,
				work_type: "уборка листвы".to_string(),
				completion_date: datetime!(2026-10-20 16:00),
				responsible_person: "Петров П. П.".to_string(),
				notes: None,
			})
			.await
			.unwrap();

		let answer = env.assistant.answer("что сделано в 42?").await.unwrap();
		let AssistantAnswer::CompletedWorks { branch, works } = answer else {
			panic!("expected a completed-work answer");
		};
		assert_eq!(branch, 42);
		assert_eq!(works.len(), 1);
	}

	#[tokio::test]
	async fn test_answer_empty_set_is_still_an_answer() {
		let env = test_env().await;
		let answer = env.assistant.answer("планы 999").await.unwrap();
		assert_eq!(
			answer,
			AssistantAnswer::Plans {
				branch: 999,
				plans: vec![]
			}
		);
	}

	#[tokio::test]
	async fn test_answer_keyword_without_digits_is_unrecognized() {
		let env = test_env().await;
		let answer = env.assistant.answer("какие планы").await.unwrap();
		assert_eq!(answer, AssistantAnswer::Unrecognized);
	}

	#[tokio::test]
	async fn test_answer_no_keyword_is_unrecognized() {
		let env = test_env().await;
		let answer = env.assistant.answer("погода в 5 часов").await.unwrap();
		assert_eq!(answer, AssistantAnswer::Unrecognized);
	}
}
