//! Modelo de Agency
//!
//! Este módulo contiene el struct Agency que mapea a la tabla agencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Agencia de alquiler - mapea exactamente a la tabla agencies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Agency {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub location: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Agency {
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        location: String,
        phone: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            location,
            phone,
            created_at: Utc::now(),
        }
    }
}
