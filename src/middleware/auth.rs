//! Middleware de autenticación JWT
//!
//! Este módulo maneja la extracción del token Bearer y la verificación
//! de la agencia autenticada. El extractor `AuthAgency` se declara como
//! parámetro en los handlers que requieren autenticación.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token};

/// Agencia autenticada extraída del JWT
#[derive(Debug, Clone)]
pub struct AuthAgency {
    pub agency_id: Uuid,
    pub email: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthAgency {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Header Authorization requerido".to_string()))?;

        let token = extract_token_from_header(auth_header)?;
        let claims = verify_token(token, &state.config)?;

        let agency_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("ID de agencia inválido".to_string()))?;

        Ok(AuthAgency {
            agency_id,
            email: claims.email,
        })
    }
}
