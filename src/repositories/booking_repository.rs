use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::booking_dto::AgencyBookingRow;
use crate::models::booking::{Booking, BookingStatus};
use crate::utils::errors::AppError;

/// Datos del cliente para una reserva nueva
#[derive(Debug, Clone)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verificar si alguna reserva no cancelada del coche solapa la ventana.
    /// Test inclusivo: NOT (end < $start OR start > $end).
    pub async fn has_conflict(
        &self,
        car_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE car_id = $1
                  AND status != 'canceled'
                  AND NOT (end_date < $2 OR start_date > $3)
            )
            "#,
        )
        .bind(car_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking booking conflict: {}", e)))?;

        Ok(result.0)
    }

    /// Crear la reserva de forma atómica respecto a otros intentos sobre el
    /// mismo coche.
    ///
    /// Dentro de una transacción se bloquea la fila del coche (FOR UPDATE),
    /// que actúa como punto de serialización por coche, y se repite la
    /// comprobación de conflicto bajo el lock antes de insertar. Dos intentos
    /// concurrentes con ventanas solapadas no pueden pasar ambos la
    /// comprobación. Si la comprobación falla no queda ningún rastro en la
    /// tabla de reservas.
    pub async fn create_checked(
        &self,
        car_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
        total_price: Decimal,
        customer: CustomerInfo,
    ) -> Result<Booking, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let locked: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM cars WHERE id = $1 FOR UPDATE")
                .bind(car_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error locking car row: {}", e)))?;

        if locked.is_none() {
            return Err(AppError::NotFound("Coche no encontrado".to_string()));
        }

        let conflict: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE car_id = $1
                  AND status != 'canceled'
                  AND NOT (end_date < $2 OR start_date > $3)
            )
            "#,
        )
        .bind(car_id)
        .bind(start)
        .bind(end)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error re-checking conflict: {}", e)))?;

        if conflict.0 {
            return Err(AppError::Conflict(
                "El coche ya está reservado en esas fechas".to_string(),
            ));
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                id, car_id, start_date, end_date, status, total_price,
                customer_name, customer_email, customer_phone, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(car_id)
        .bind(start)
        .bind(end)
        .bind(BookingStatus::Pending.as_str())
        .bind(total_price)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating booking: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing booking: {}", e)))?;

        Ok(booking)
    }

    /// Listar las reservas de todos los coches de una agencia, cada una con
    /// el título del coche, ordenadas de más reciente a más antigua.
    pub async fn list_for_agency(&self, agency_id: Uuid) -> Result<Vec<AgencyBookingRow>, AppError> {
        let result = sqlx::query_as::<_, AgencyBookingRow>(
            r#"
            SELECT b.id, b.car_id, c.title AS car_title, b.start_date, b.end_date,
                   b.status, b.total_price, b.customer_name, b.customer_email,
                   b.customer_phone, b.created_at
            FROM bookings b
            JOIN cars c ON c.id = b.car_id
            WHERE c.agency_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing agency bookings: {}", e)))?;

        Ok(result)
    }
}
