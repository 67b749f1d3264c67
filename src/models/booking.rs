//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking, su estado y el test de
//! solapamiento inclusivo que garantiza que no haya dobles reservas.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la reserva
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Canceled => "canceled",
        }
    }
}

/// Reserva confirmada o pendiente - mapea exactamente a la tabla bookings.
/// El motor solo crea reservas `pending`; `canceled` es un estado terminal
/// que se alcanza por una transición externa y deja de bloquear fechas.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub total_price: Decimal,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Verificar si la reserva bloquea fechas (cualquier estado salvo canceled)
    pub fn is_blocking(&self) -> bool {
        self.status != BookingStatus::Canceled.as_str()
    }
}

/// Test de solapamiento inclusivo entre dos rangos de fechas.
///
/// Dos rangos [s1, e1] y [s2, e2] solapan salvo que uno termine
/// estrictamente antes de que empiece el otro:
/// `NOT (e1 < s2 OR s1 > e2)`.
pub fn ranges_overlap(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    !(e1 < s2 || s1 > e2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_ranges_overlap() {
        // Solapamiento parcial
        assert!(ranges_overlap(d("2024-03-02"), d("2024-03-05"), d("2024-03-04"), d("2024-03-06")));
        // Contención completa
        assert!(ranges_overlap(d("2024-03-01"), d("2024-03-10"), d("2024-03-04"), d("2024-03-06")));
        // Mismo día de borde cuenta como solapamiento (rangos inclusivos)
        assert!(ranges_overlap(d("2024-03-01"), d("2024-03-05"), d("2024-03-05"), d("2024-03-08")));
        // Disjuntos
        assert!(!ranges_overlap(d("2024-03-01"), d("2024-03-03"), d("2024-03-04"), d("2024-03-06")));
        assert!(!ranges_overlap(d("2024-03-04"), d("2024-03-06"), d("2024-03-01"), d("2024-03-03")));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let (s1, e1) = (d("2024-03-02"), d("2024-03-05"));
        let (s2, e2) = (d("2024-03-04"), d("2024-03-06"));
        assert_eq!(ranges_overlap(s1, e1, s2, e2), ranges_overlap(s2, e2, s1, e1));
    }

    #[test]
    fn test_canceled_does_not_block() {
        let booking = Booking {
            id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            start_date: d("2024-03-01"),
            end_date: d("2024-03-05"),
            status: BookingStatus::Canceled.as_str().to_string(),
            total_price: Decimal::new(200, 0),
            customer_name: "Cliente".to_string(),
            customer_email: "cliente@test.com".to_string(),
            customer_phone: None,
            created_at: Utc::now(),
        };
        assert!(!booking.is_blocking());
    }
}
