use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
};
use pergola_backend_service::{BackendError, branch::BranchError, object::ObjectError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error(transparent)]
	BackendError(BackendError),

	#[error("api error: {1}")]
	CustomRef(StatusCode, &'static str),
	#[error("api error: {1}")]
	CustomString(StatusCode, String),
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		match self {
			ApiError::CustomRef(status, message) => (status, message).into_response(),
			ApiError::CustomString(status, message) => (status, message).into_response(),
			ApiError::BackendError(err) => {
				let status = match &err {
					BackendError::BranchError(BranchError::NotFound(_))
					| BackendError::ObjectError(ObjectError::BranchNotFound(_)) => {
						StatusCode::NOT_FOUND
					}
					BackendError::BranchError(BranchError::DuplicateCode(_)) => {
						StatusCode::CONFLICT
					}
					_ => StatusCode::INTERNAL_SERVER_ERROR,
				};
				(status, err.to_string()).into_response()
			}
		}
	}
}

impl<T: Into<BackendError>> From<T> for ApiError {
	fn from(value: T) -> Self {
		Self::BackendError(value.into())
	}
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

pub(crate) trait IntoCustomApiError {
	fn into_custom_api_error(self, status: StatusCode) -> ApiError;
}

impl IntoCustomApiError for &'static str {
	fn into_custom_api_error(self, status: StatusCode) -> ApiError {
		ApiError::CustomRef(status, self)
	}
}
impl IntoCustomApiError for String {
	fn into_custom_api_error(self, status: StatusCode) -> ApiError {
		ApiError::CustomString(status, self)
	}
}

pub(crate) trait OptionExt<T> {
	fn or_api_error<M: IntoCustomApiError>(
		self,
		status: StatusCode,
		message: M,
	) -> Result<T, ApiError>;
}

impl<T> OptionExt<T> for Option<T> {
	fn or_api_error<M: IntoCustomApiError>(
		self,
		status: StatusCode,
		message: M,
	) -> Result<T, ApiError> {
		match self {
			Some(val) => Ok(val),
			None => Err(message.into_custom_api_error(status)),
		}
	}
}
