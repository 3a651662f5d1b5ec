//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del servicio de inventario
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Missing or invalid key: '{0}'")]
    MissingField(String),

    #[error("Invalid value for '{field}': expected {expected}")]
    InvalidField { field: String, expected: &'static str },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Vehicle with VIN '{0}' already exists")]
    DuplicateVin(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Error estándar cuando un VIN no existe en el inventario
    pub fn vehicle_not_found() -> Self {
        AppError::NotFound("Vehicle not found".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingField(_)
            | AppError::InvalidField { .. }
            | AppError::Validation(_)
            | AppError::InvalidBody(_)
            | AppError::DuplicateVin(_)
            | AppError::Constraint(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::InvalidField { .. } => "INVALID_FIELD",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidBody(_) => "INVALID_BODY",
            AppError::DuplicateVin(_) => "DUPLICATE_VIN",
            AppError::Constraint(_) => "CONSTRAINT_VIOLATION",
            AppError::Database(_) => "DB_ERROR",
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let error_response = match &self {
            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                ErrorResponse {
                    error: "The provided data is invalid".to_string(),
                    code,
                    details: Some(json!(e)),
                }
            }

            AppError::Database(e) => {
                error!("❌ Database error: {}", e);
                ErrorResponse {
                    error: "An error occurred while accessing the database".to_string(),
                    code,
                    details: None,
                }
            }

            other => {
                warn!("⚠️ {} ({})", other, code);
                ErrorResponse {
                    error: other.to_string(),
                    code,
                    details: None,
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Traduce un fallo de escritura de SQLx al error de dominio.
///
/// Las violaciones de clave primaria pasan a `DuplicateVin` y las de CHECK o
/// NOT NULL a `Constraint`. Cualquier otro fallo de la base (tabla
/// inexistente, base bloqueada) sigue siendo `Database`.
pub fn map_write_error(err: sqlx::Error, vin: &str) -> AppError {
    match err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => AppError::DuplicateVin(vin.to_string()),
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                AppError::Constraint(db_err.message().to_string())
            }
            _ => AppError::Database(sqlx::Error::Database(db_err)),
        },
        other => AppError::Database(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::vehicle_not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MissingField("model_name".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::DuplicateVin("abc".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_field_message_names_key() {
        let err = AppError::MissingField("manufacturer_name".into());
        assert_eq!(err.to_string(), "Missing or invalid key: 'manufacturer_name'");
        assert_eq!(err.code(), "MISSING_FIELD");
    }

    #[test]
    fn test_non_database_write_error_stays_database() {
        let err = map_write_error(sqlx::Error::PoolTimedOut, "abc");
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_a_constraint_violation() {
        let pool = crate::config::database::DatabaseConfig::create_test_pool()
            .await
            .unwrap();
        let err = sqlx::query("INSERT INTO vehicles (vin_number) VALUES ('abc')")
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(matches!(err, sqlx::Error::Database(_)));

        let mapped = map_write_error(err, "abc");
        assert!(matches!(mapped, AppError::Database(_)));
        assert_eq!(mapped.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
