//! Modelo de AvailabilityRange
//!
//! Este módulo contiene el struct AvailabilityRange y los predicados de
//! cobertura que usa el motor de reservas. La cobertura exige que un único
//! rango contenga la ventana completa; dos rangos adyacentes nunca se
//! combinan.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rango de disponibilidad declarado por la agencia - mapea a availability_ranges
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AvailabilityRange {
    pub id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl AvailabilityRange {
    /// Verificar que este rango contiene la ventana completa [start, end]
    pub fn contains(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= start && self.end_date >= end
    }

    /// Solapamiento débil con una ventana: rango.start <= ventana.end
    /// AND rango.end >= ventana.start. Es el test que usa la búsqueda,
    /// más laxo que el de contención que exige la reserva.
    pub fn overlaps_window(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> AvailabilityRange {
        AvailabilityRange {
            id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            created_at: Utc::now(),
        }
    }

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_contains() {
        let r = range("2024-03-01", "2024-03-10");
        assert!(r.contains(d("2024-03-02"), d("2024-03-05")));
        assert!(r.contains(d("2024-03-01"), d("2024-03-10"))); // bordes inclusivos
        assert!(!r.contains(d("2024-02-28"), d("2024-03-05")));
        assert!(!r.contains(d("2024-03-05"), d("2024-03-11")));
    }

    #[test]
    fn test_overlaps_window_weaker_than_contains() {
        let r = range("2024-03-01", "2024-03-10");
        // Solapa la ventana pero no la contiene: visible en búsqueda,
        // rechazado al reservar
        assert!(r.overlaps_window(d("2024-03-08"), d("2024-03-15")));
        assert!(!r.contains(d("2024-03-08"), d("2024-03-15")));
    }

    #[test]
    fn test_adjacent_ranges_do_not_combine() {
        // Dos rangos adyacentes cubren juntos la ventana, pero la cobertura
        // exige contención en un único rango: ninguno la contiene
        let r1 = range("2024-03-01", "2024-03-05");
        let r2 = range("2024-03-06", "2024-03-10");
        let (start, end) = (d("2024-03-03"), d("2024-03-08"));
        assert!(!r1.contains(start, end));
        assert!(!r2.contains(start, end));
    }

    #[test]
    fn test_overlaps_window_disjoint() {
        let r = range("2024-04-01", "2024-04-10");
        assert!(!r.overlaps_window(d("2024-03-01"), d("2024-03-03")));
        // Tocando el borde sí solapa (rangos inclusivos)
        assert!(r.overlaps_window(d("2024-03-25"), d("2024-04-01")));
    }
}
