//! DTOs de Car
//!
//! Requests y responses para creación, detalle y búsqueda de coches.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::car::{Car, CarWithAgency};

/// Request para crear un coche
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 2))]
    pub title: String,

    pub brand: Option<String>,
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    /// "manual" o "automatic"
    pub transmission: Option<String>,

    pub seats: Option<i32>,
    pub doors: Option<i32>,
    pub trunk_liters: Option<Decimal>,
    pub fuel_type: Option<String>,

    /// Lista separada por comas: "AC,Bluetooth,GPS"
    pub options: Option<String>,

    pub daily_price: Decimal,

    #[validate(length(min = 2))]
    pub location: String,

    #[validate(url)]
    pub image_url: Option<String>,

    pub description: Option<String>,
}

/// Filtros de búsqueda de coches
#[derive(Debug, Default, Deserialize)]
pub struct CarFilters {
    pub location: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Response de coche para la agencia propietaria
#[derive(Debug, Serialize)]
pub struct CarResponse {
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

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            agency_id: car.agency_id,
            title: car.title,
            brand: car.brand,
            model: car.model,
            year: car.year,
            transmission: car.transmission,
            seats: car.seats,
            doors: car.doors,
            trunk_liters: car.trunk_liters,
            fuel_type: car.fuel_type,
            options: car.options,
            daily_price: car.daily_price,
            location: car.location,
            image_url: car.image_url,
            description: car.description,
            created_at: car.created_at,
        }
    }
}

/// Response de coche en resultados de búsqueda y detalle público,
/// con los datos de contacto de la agencia adjuntos
#[derive(Debug, Serialize)]
pub struct CarSearchResponse {
    pub id: Uuid,
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
    pub agency_name: String,
    pub agency_phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<CarWithAgency> for CarSearchResponse {
    fn from(car: CarWithAgency) -> Self {
        Self {
            id: car.id,
            title: car.title,
            brand: car.brand,
            model: car.model,
            year: car.year,
            transmission: car.transmission,
            seats: car.seats,
            doors: car.doors,
            trunk_liters: car.trunk_liters,
            fuel_type: car.fuel_type,
            options: car.options,
            daily_price: car.daily_price,
            location: car.location,
            image_url: car.image_url,
            description: car.description,
            agency_name: car.agency_name,
            agency_phone: car.agency_phone,
            created_at: car.created_at,
        }
    }
}
