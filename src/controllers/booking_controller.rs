//! Motor de reservas
//!
//! Orquesta la creación de una reserva: existencia del coche, formato de
//! fechas, cobertura de disponibilidad, conflicto con otras reservas,
//! duración y precio. El orden de las comprobaciones determina qué error
//! recibe cada petición y no debe alterarse.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest};
use crate::repositories::availability_repository::AvailabilityRepository;
use crate::repositories::booking_repository::{BookingRepository, CustomerInfo};
use crate::repositories::car_repository::CarRepository;
use crate::utils::dates::{days_between, is_iso_date, parse_iso_date, range_ordered};
use crate::utils::errors::AppError;
use crate::utils::validation::{require_email, require_min_length};

pub struct BookingController {
    cars: CarRepository,
    availability: AvailabilityRepository,
    bookings: BookingRepository,
}

/// Validar formato y orden de las fechas de una reserva.
///
/// El formato se comprueba primero con el patrón laxo (YYYY-MM-DD); el parseo
/// rechaza después las fechas imposibles de calendario como 2024-02-30.
fn validate_booking_dates(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), AppError> {
    if !is_iso_date(start) || !is_iso_date(end) {
        return Err(AppError::ValidationError(
            "Las fechas deben tener formato YYYY-MM-DD".to_string(),
        ));
    }

    let start = parse_iso_date(start)?;
    let end = parse_iso_date(end)?;

    if !range_ordered(start, end) {
        return Err(AppError::ValidationError("Rango de fechas inválido".to_string()));
    }

    Ok((start, end))
}

/// Precio total: días de calendario × precio diario
fn compute_total_price(days: i64, daily_price: Decimal) -> Decimal {
    Decimal::from(days) * daily_price
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            availability: AvailabilityRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateBookingRequest) -> Result<BookingResponse, AppError> {
        // 1. Existencia del coche
        let car = self
            .cars
            .find_with_agency(request.car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche no encontrado".to_string()))?;

        // 2. Formato y orden de fechas
        let (start, end) = validate_booking_dates(&request.start_date, &request.end_date)?;

        // Datos del cliente
        require_min_length(&request.customer_name, 2, "customer_name")?;
        require_email(&request.customer_email)?;

        // 3. Cobertura: un único rango de disponibilidad debe contener
        //    la ventana completa
        if !self.availability.covers(car.id, start, end).await? {
            return Err(AppError::Conflict(
                "El coche no está disponible en las fechas solicitadas".to_string(),
            ));
        }

        // 4. Conflicto con reservas no canceladas
        if self.bookings.has_conflict(car.id, start, end).await? {
            return Err(AppError::Conflict(
                "El coche ya está reservado en esas fechas".to_string(),
            ));
        }

        // 5. Duración: una reserva del mismo día no es válida
        let days = days_between(start, end);
        if days <= 0 {
            return Err(AppError::ValidationError(
                "La reserva debe durar al menos un día".to_string(),
            ));
        }

        // 6. Precio calculado una sola vez, nunca se recalcula
        let total_price = compute_total_price(days, car.daily_price);

        // 7. Commit atómico: el conflicto se re-verifica bajo el lock de la
        //    fila del coche dentro de la misma transacción
        let booking = self
            .bookings
            .create_checked(
                car.id,
                start,
                end,
                total_price,
                CustomerInfo {
                    name: request.customer_name,
                    email: request.customer_email,
                    phone: request.customer_phone,
                },
            )
            .await?;

        tracing::info!(
            car_id = %car.id,
            booking_id = %booking.id,
            "Reserva creada: {} -> {}",
            booking.start_date,
            booking.end_date
        );

        Ok(BookingResponse {
            id: booking.id,
            car_id: booking.car_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            status: booking.status,
            total_price: booking.total_price,
            agency_name: car.agency_name,
            agency_phone: car.agency_phone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_booking_dates_ok() {
        let (start, end) = validate_booking_dates("2024-03-02", "2024-03-05").unwrap();
        assert_eq!(start.to_string(), "2024-03-02");
        assert_eq!(end.to_string(), "2024-03-05");
    }

    #[test]
    fn test_validate_booking_dates_bad_format() {
        assert!(matches!(
            validate_booking_dates("2024/03/02", "2024-03-05"),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            validate_booking_dates("2024-03-02", "05-03-2024"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_booking_dates_impossible_calendar_date() {
        // Pasa el patrón laxo pero el parseo la rechaza, igual que el
        // comportamiento observable del sistema original
        assert!(matches!(
            validate_booking_dates("2024-02-30", "2024-03-05"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_booking_dates_unordered() {
        assert!(matches!(
            validate_booking_dates("2024-03-10", "2024-03-01"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_compute_total_price() {
        // [2024-01-01, 2024-01-04] a 100/día -> 3 días -> 300
        let daily = Decimal::new(100, 0);
        assert_eq!(compute_total_price(3, daily), Decimal::new(300, 0));
    }

    #[test]
    fn test_compute_total_price_decimal() {
        let daily = Decimal::new(4950, 2); // 49.50
        assert_eq!(compute_total_price(4, daily), Decimal::new(19800, 2)); // 198.00
    }
}
