use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::availability_dto::{AddAvailabilityRequest, AvailabilityResponse};
use crate::repositories::availability_repository::AvailabilityRepository;
use crate::repositories::car_repository::CarRepository;
use crate::utils::dates::{is_iso_date, parse_iso_date, range_ordered};
use crate::utils::errors::AppError;

pub struct AvailabilityController {
    repository: AvailabilityRepository,
    cars: CarRepository,
}

impl AvailabilityController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AvailabilityRepository::new(pool.clone()),
            cars: CarRepository::new(pool),
        }
    }

    /// Declarar un rango de disponibilidad. Solo la agencia propietaria
    /// del coche puede hacerlo. Devuelve la lista completa actualizada.
    pub async fn add(
        &self,
        agency_id: Uuid,
        car_id: Uuid,
        request: AddAvailabilityRequest,
    ) -> Result<Vec<AvailabilityResponse>, AppError> {
        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche no encontrado".to_string()))?;

        // Verificar que el coche pertenece a la agencia autenticada
        if car.agency_id != agency_id {
            return Err(AppError::Forbidden(
                "El coche no pertenece a esta agencia".to_string(),
            ));
        }

        // Validar formato y orden de las fechas
        if !is_iso_date(&request.start_date) || !is_iso_date(&request.end_date) {
            return Err(AppError::ValidationError(
                "Las fechas deben tener formato YYYY-MM-DD".to_string(),
            ));
        }

        let start = parse_iso_date(&request.start_date)?;
        let end = parse_iso_date(&request.end_date)?;

        if !range_ordered(start, end) {
            return Err(AppError::ValidationError("Rango de fechas inválido".to_string()));
        }

        let ranges = self.repository.add_range(car_id, start, end).await?;

        Ok(ranges.into_iter().map(AvailabilityResponse::from).collect())
    }

    /// Listado público de los rangos de un coche, ordenados por fecha de inicio
    pub async fn list(&self, car_id: Uuid) -> Result<Vec<AvailabilityResponse>, AppError> {
        let ranges = self.repository.list_ranges(car_id).await?;

        Ok(ranges.into_iter().map(AvailabilityResponse::from).collect())
    }
}
