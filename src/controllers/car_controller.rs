use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::car_dto::{CarFilters, CarResponse, CarSearchResponse, CreateCarRequest};
use crate::models::car::Car;
use crate::repositories::car_repository::{CarRepository, DateWindow};
use crate::utils::dates::{is_iso_date, parse_iso_date, range_ordered};
use crate::utils::errors::AppError;
use crate::utils::validation::{require_min_length, require_one_of, require_positive_price};

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        agency_id: Uuid,
        request: CreateCarRequest,
    ) -> Result<CarResponse, AppError> {
        // Validar campos
        require_min_length(&request.title, 2, "title")?;
        require_min_length(&request.location, 2, "location")?;
        require_positive_price(request.daily_price, "daily_price")?;

        if let Some(ref transmission) = request.transmission {
            require_one_of(transmission, &["manual", "automatic"], "transmission")?;
        }

        let car = Car {
            id: Uuid::new_v4(),
            agency_id,
            title: request.title,
            brand: request.brand,
            model: request.model,
            year: request.year,
            transmission: request.transmission,
            seats: request.seats,
            doors: request.doors,
            trunk_liters: request.trunk_liters,
            fuel_type: request.fuel_type,
            options: request.options,
            daily_price: request.daily_price,
            location: request.location,
            image_url: request.image_url,
            description: request.description,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&car).await?;

        Ok(CarResponse::from(saved))
    }

    /// Detalle público de un coche con el contacto de su agencia
    pub async fn get_by_id(&self, id: Uuid) -> Result<CarSearchResponse, AppError> {
        let car = self
            .repository
            .find_with_agency(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche no encontrado".to_string()))?;

        Ok(CarSearchResponse::from(car))
    }

    /// Búsqueda pública con filtros opcionales de ubicación, precio y ventana
    /// de fechas. La ventana exige ambas fechas; con una sola es un error.
    pub async fn search(&self, filters: CarFilters) -> Result<Vec<CarSearchResponse>, AppError> {
        let window = match (&filters.start_date, &filters.end_date) {
            (None, None) => None,
            (Some(start), Some(end)) => {
                if !is_iso_date(start) || !is_iso_date(end) {
                    return Err(AppError::ValidationError(
                        "Las fechas deben tener formato YYYY-MM-DD".to_string(),
                    ));
                }
                let start = parse_iso_date(start)?;
                let end = parse_iso_date(end)?;
                if !range_ordered(start, end) {
                    return Err(AppError::ValidationError(
                        "Rango de fechas inválido".to_string(),
                    ));
                }
                Some(DateWindow { start, end })
            }
            _ => {
                return Err(AppError::ValidationError(
                    "start_date y end_date deben indicarse juntos".to_string(),
                ))
            }
        };

        let cars = self
            .repository
            .search(
                filters.location.as_deref(),
                filters.min_price,
                filters.max_price,
                window,
            )
            .await?;

        Ok(cars.into_iter().map(CarSearchResponse::from).collect())
    }
}
