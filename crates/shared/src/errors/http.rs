use crate::errors::{errors::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        AppErrorHttp(err)
    }
}

impl AppErrorHttp {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppErrorHttp(ServiceError::Validation(vec![message.into()]))
    }

    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            ServiceError::Date(err) => (StatusCode::BAD_REQUEST, capitalize(&err.to_string())),

            ServiceError::Validation(errors) => (StatusCode::BAD_REQUEST, errors.join("; ")),

            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                RepositoryError::AlreadyExists(msg) => (StatusCode::CONFLICT, msg.clone()),
                RepositoryError::Constraint(msg) => (
                    StatusCode::BAD_REQUEST,
                    format!("Constraint violation: {msg}"),
                ),
                RepositoryError::Sqlx(_) | RepositoryError::Custom(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
                }
            },

            ServiceError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();

        if status.is_server_error() {
            error!("🚨 {}", self.0);
        } else {
            warn!("⚠️ {}", self.0);
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
