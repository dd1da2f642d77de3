use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Stable error codes returned in `{"error": <code>}` bodies.
pub mod codes {
    pub const MISSING_PARAMETERS: &str = "missing_parameters";
    pub const INVALID_STATUS: &str = "invalid_status";
    pub const INVALID_ID: &str = "invalid_id";
    pub const INVALID_BODY: &str = "invalid_body";

    pub const COULD_NOT_GET_BUDGETS: &str = "could_not_get_budgets";
    pub const COULD_NOT_CREATE_BUDGET: &str = "could_not_create_budget";
    pub const COULD_NOT_DELETE_BUDGET: &str = "could_not_delete_budget";
    pub const COULD_NOT_TRANSFER_BUDGETS: &str = "could_not_transfer_budgets";

    pub const COULD_NOT_GET_ALL_MONTH_OPERATIONS: &str = "could_not_get_all_month_operations";
    pub const COULD_NOT_CREATE_OPERATION: &str = "could_not_create_operation";
    pub const COULD_NOT_UPDATE_OPERATION: &str = "could_not_update_operation";
    pub const COULD_NOT_DELETE_OPERATION: &str = "could_not_delete_operation";
    pub const COULD_NOT_GET_SUMMARY: &str = "could_not_get_summary";
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized,
    Unprocessable(String),
    DatabaseError(String),
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>) -> Self {
        Self::BadRequest(code.into())
    }

    pub fn unprocessable(code: impl Into<String>) -> Self {
        Self::Unprocessable(code.into())
    }

    pub fn database_error(code: impl Into<String>) -> Self {
        Self::DatabaseError(code.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest(code) => Some(code.as_str()),
            ApiError::Unauthorized => None,
            ApiError::Unprocessable(code) => Some(code.as_str()),
            ApiError::DatabaseError(code) => Some(code.as_str()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self.code() {
            Some(code) => (status, Json(json!({ "error": code }))).into_response(),
            // unauthenticated requests get no body
            None => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_error_kinds() {
        assert_eq!(ApiError::bad_request(codes::INVALID_ID).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::unprocessable(codes::MISSING_PARAMETERS).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::database_error(codes::COULD_NOT_GET_SUMMARY).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn unauthorized_has_no_code() {
        assert_eq!(ApiError::Unauthorized.code(), None);
        assert_eq!(
            ApiError::database_error(codes::COULD_NOT_DELETE_BUDGET).code(),
            Some("could_not_delete_budget")
        );
    }
}
