//! DTOs de Booking
//!
//! Requests y responses del motor de reservas.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para crear una reserva.
/// Las fechas llegan como strings para validar el formato ISO antes de parsear.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub car_id: Uuid,
    pub start_date: String,
    pub end_date: String,

    #[validate(length(min = 2))]
    pub customer_name: String,

    #[validate(email)]
    pub customer_email: String,

    pub customer_phone: Option<String>,
}

/// Response de una reserva creada, con los datos de contacto
/// de la agencia para el cliente
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub total_price: Decimal,
    pub agency_name: String,
    pub agency_phone: String,
}

/// Reserva en el listado de la agencia, con el título del coche adjunto
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AgencyBookingRow {
    pub id: Uuid,
    pub car_id: Uuid,
    pub car_title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub total_price: Decimal,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
