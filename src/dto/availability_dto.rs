//! DTOs de disponibilidad
//!
//! Requests y responses para los rangos de disponibilidad de un coche.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::availability::AvailabilityRange;

/// Request para declarar un rango de disponibilidad.
/// Las fechas llegan como strings para validar el formato ISO antes de parsear.
#[derive(Debug, Deserialize)]
pub struct AddAvailabilityRequest {
    pub start_date: String,
    pub end_date: String,
}

/// Response de un rango de disponibilidad
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<AvailabilityRange> for AvailabilityResponse {
    fn from(range: AvailabilityRange) -> Self {
        Self {
            id: range.id,
            car_id: range.car_id,
            start_date: range.start_date,
            end_date: range.end_date,
        }
    }
}
