//! Utilidades de fechas
//!
//! Este módulo contiene las funciones de fechas que usa el motor de reservas:
//! validación de formato ISO, orden de rangos y cálculo de días.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::errors::AppError;

lazy_static! {
    static ref ISO_DATE_RE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Verificar que un string tiene formato `YYYY-MM-DD`.
///
/// Solo valida el formato, no la validez calendaria: `2024-02-30` pasa.
/// La validez real se comprueba al parsear con `parse_iso_date`.
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE_RE.is_match(value)
}

/// Parsear un string `YYYY-MM-DD` a fecha de calendario
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::ValidationError(format!("Fecha inválida: '{}'", value)))
}

/// Verificar que el rango está ordenado (start <= end)
pub fn range_ordered(start: NaiveDate, end: NaiveDate) -> bool {
    start <= end
}

/// Días de calendario entre dos fechas (end - start).
///
/// Devuelve 0 para el mismo día y un valor negativo si end < start;
/// el llamador debe rechazar valores <= 0.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_is_iso_date() {
        assert!(is_iso_date("2024-01-15"));
        assert!(is_iso_date("1999-12-31"));
        assert!(!is_iso_date("2024/01/15"));
        assert!(!is_iso_date("2024-1-15"));
        assert!(!is_iso_date("15-01-2024"));
        assert!(!is_iso_date(""));
    }

    #[test]
    fn test_is_iso_date_no_calendar_check() {
        // El formato pasa aunque la fecha no exista en el calendario
        assert!(is_iso_date("2024-02-30"));
        assert!(is_iso_date("2024-13-01"));
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_iso_date("2024-02-30").is_err());
        assert!(parse_iso_date("2024-13-01").is_err());
        assert!(parse_iso_date("2024-02-29").is_ok()); // bisiesto
    }

    #[test]
    fn test_range_ordered() {
        assert!(range_ordered(d("2024-03-01"), d("2024-03-10")));
        assert!(range_ordered(d("2024-03-01"), d("2024-03-01")));
        assert!(!range_ordered(d("2024-03-10"), d("2024-03-01")));
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(d("2024-01-01"), d("2024-01-04")), 3);
        assert_eq!(days_between(d("2024-01-01"), d("2024-01-01")), 0);
        assert_eq!(days_between(d("2024-01-04"), d("2024-01-01")), -3);
        // Cruce de mes con año bisiesto
        assert_eq!(days_between(d("2024-02-28"), d("2024-03-01")), 2);
    }
}
