//! Modelo de Car
//!
//! Este módulo contiene el struct Car y la variante con los datos de
//! contacto de la agencia que devuelven la búsqueda y el detalle.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Car principal - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub title: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub transmission: Option<String>,
    pub seats: Option<i32>,
    pub doors: Option<i32>,
    pub trunk_liters: Option<Decimal>,
    pub fuel_type: Option<String>,
    pub options: Option<String>,
    pub daily_price: Decimal,
    pub location: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Car con los campos de contacto de la agencia propietaria adjuntos.
/// Es la fila que devuelven la búsqueda y el detalle público.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CarWithAgency {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub title: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub transmission: Option<String>,
    pub seats: Option<i32>,
    pub doors: Option<i32>,
    pub trunk_liters: Option<Decimal>,
    pub fuel_type: Option<String>,
    pub options: Option<String>,
    pub daily_price: Decimal,
    pub location: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub agency_name: String,
    pub agency_phone: String,
}
