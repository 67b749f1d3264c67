//! DTOs de Agency
//!
//! Requests y responses para registro, login y perfil de agencias.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::agency::Agency;

/// Request para registrar una agencia
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAgencyRequest {
    #[validate(length(min = 2))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,

    #[validate(length(min = 2))]
    pub location: String,

    #[validate(length(min = 6))]
    pub phone: String,
}

/// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response de agencia (sin password hash)
#[derive(Debug, Serialize)]
pub struct AgencyResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub location: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<Agency> for AgencyResponse {
    fn from(agency: Agency) -> Self {
        Self {
            id: agency.id,
            name: agency.name,
            email: agency.email,
            location: agency.location,
            phone: agency.phone,
            created_at: agency.created_at,
        }
    }
}

/// Response de autenticación con token JWT
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub agency: AgencyResponse,
}

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
