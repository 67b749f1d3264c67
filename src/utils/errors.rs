//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: String,
}

impl AppError {
    /// Código estable para que los clientes distingan el tipo de error
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Conflict(_) => "CONFLICT",
            AppError::DatabaseError(_) => "DB_ERROR",
            AppError::Jwt(_) => "JWT_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code().to_string();

        let (status, error, message) = match self {
            AppError::ValidationError(msg) => {
                (StatusCode::BAD_REQUEST, "Validation Error".to_string(), msg)
            }

            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "Not Found".to_string(), msg)
            }

            AppError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, "Forbidden".to_string(), msg)
            }

            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string(), msg)
            }

            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, "Conflict".to_string(), msg)
            }

            AppError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database Error".to_string(),
                    "An error occurred while accessing the database".to_string(),
                )
            }

            AppError::Jwt(msg) => {
                (StatusCode::UNAUTHORIZED, "JWT Error".to_string(), msg)
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error, message, code })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Conflict("x".into()).code(), "CONFLICT");
        assert_eq!(AppError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(AppError::ValidationError("x".into()).code(), "VALIDATION_ERROR");
        assert_eq!(AppError::Forbidden("x".into()).code(), "FORBIDDEN");
    }
}
