use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::car::{Car, CarWithAgency};
use crate::utils::errors::AppError;

/// Ventana de fechas ya validada y parseada para la búsqueda
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, car: &Car) -> Result<Car, AppError> {
        let result = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (
                id, agency_id, title, brand, model, year, transmission, seats,
                doors, trunk_liters, fuel_type, options, daily_price, location,
                image_url, description, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(car.id)
        .bind(car.agency_id)
        .bind(&car.title)
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.transmission)
        .bind(car.seats)
        .bind(car.doors)
        .bind(car.trunk_liters)
        .bind(&car.fuel_type)
        .bind(&car.options)
        .bind(car.daily_price)
        .bind(&car.location)
        .bind(&car.image_url)
        .bind(&car.description)
        .bind(car.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating car: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let result = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding car: {}", e)))?;

        Ok(result)
    }

    /// Obtener un coche con los datos de contacto de su agencia
    pub async fn find_with_agency(&self, id: Uuid) -> Result<Option<CarWithAgency>, AppError> {
        let result = sqlx::query_as::<_, CarWithAgency>(
            r#"
            SELECT c.*, a.name AS agency_name, a.phone AS agency_phone
            FROM cars c
            JOIN agencies a ON a.id = c.agency_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding car: {}", e)))?;

        Ok(result)
    }

    /// Búsqueda de coches con filtros opcionales.
    ///
    /// Con ventana de fechas: el coche entra si algún rango de disponibilidad
    /// solapa débilmente la ventana (r.start <= f.end AND r.end >= f.start) y
    /// queda fuera si alguna reserva no cancelada solapa la ventana. La
    /// contención estricta solo se exige al reservar, no aquí.
    ///
    /// Resultados sin duplicados (EXISTS, sin join multiplicador), ordenados
    /// por fecha de creación descendente.
    pub async fn search(
        &self,
        location: Option<&str>,
        min_price: Option<Decimal>,
        max_price: Option<Decimal>,
        window: Option<DateWindow>,
    ) -> Result<Vec<CarWithAgency>, AppError> {
        let (window_start, window_end) = match window {
            Some(w) => (Some(w.start), Some(w.end)),
            None => (None, None),
        };

        let result = sqlx::query_as::<_, CarWithAgency>(
            r#"
            SELECT c.*, a.name AS agency_name, a.phone AS agency_phone
            FROM cars c
            JOIN agencies a ON a.id = c.agency_id
            WHERE ($1::text IS NULL OR c.location LIKE '%' || $1 || '%')
              AND ($2::numeric IS NULL OR c.daily_price >= $2)
              AND ($3::numeric IS NULL OR c.daily_price <= $3)
              AND ($4::date IS NULL OR EXISTS (
                    SELECT 1 FROM availability_ranges r
                    WHERE r.car_id = c.id
                      AND r.start_date <= $5
                      AND r.end_date >= $4
              ))
              AND ($4::date IS NULL OR NOT EXISTS (
                    SELECT 1 FROM bookings b
                    WHERE b.car_id = c.id
                      AND b.status != 'canceled'
                      AND NOT (b.end_date < $4 OR b.start_date > $5)
              ))
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(location)
        .bind(min_price)
        .bind(max_price)
        .bind(window_start)
        .bind(window_end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error searching cars: {}", e)))?;

        Ok(result)
    }
}
