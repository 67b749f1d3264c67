use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::availability::AvailabilityRange;
use crate::utils::errors::AppError;

pub struct AvailabilityRepository {
    pool: PgPool,
}

impl AvailabilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Añadir un rango de disponibilidad y devolver la lista completa
    /// actualizada del coche, ordenada por fecha de inicio.
    ///
    /// No se comprueba solapamiento entre rangos: rangos duplicados o
    /// solapados son válidos y se guardan tal cual (append-only).
    pub async fn add_range(
        &self,
        car_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AvailabilityRange>, AppError> {
        sqlx::query(
            r#"
            INSERT INTO availability_ranges (id, car_id, start_date, end_date, created_at)
            VALUES ($1, $2, $3, $4, now())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(car_id)
        .bind(start)
        .bind(end)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error adding availability range: {}", e)))?;

        self.list_ranges(car_id).await
    }

    /// Listar los rangos del coche ordenados por fecha de inicio ascendente.
    /// Devuelve lista vacía si el coche no tiene rangos o no existe.
    pub async fn list_ranges(&self, car_id: Uuid) -> Result<Vec<AvailabilityRange>, AppError> {
        let result = sqlx::query_as::<_, AvailabilityRange>(
            "SELECT * FROM availability_ranges WHERE car_id = $1 ORDER BY start_date ASC",
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing availability: {}", e)))?;

        Ok(result)
    }

    /// Verificar que existe UN rango que contiene la ventana completa.
    ///
    /// Contención de rango único: una petición que cruza dos rangos
    /// adyacentes se rechaza aunque juntos la cubran.
    pub async fn covers(
        &self,
        car_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM availability_ranges
                WHERE car_id = $1 AND start_date <= $2 AND end_date >= $3
            )
            "#,
        )
        .bind(car_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking coverage: {}", e)))?;

        Ok(result.0)
    }
}
