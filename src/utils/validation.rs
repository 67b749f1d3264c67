//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de los requests antes de tocar la base de datos.

use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// Validar que un string no esté vacío (tras trim)
pub fn require_not_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("El campo '{}' es requerido", field)));
    }
    Ok(())
}

/// Validar longitud mínima de un string
pub fn require_min_length(value: &str, min: usize, field: &str) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::ValidationError(format!(
            "El campo '{}' debe tener al menos {} caracteres",
            field, min
        )));
    }
    Ok(())
}

/// Validar formato de email (básico)
pub fn require_email(value: &str) -> Result<(), AppError> {
    if !value.contains('@') || !value.contains('.') {
        return Err(AppError::ValidationError(format!("Email inválido: '{}'", value)));
    }
    Ok(())
}

/// Validar que un precio sea estrictamente positivo
pub fn require_positive_price(value: Decimal, field: &str) -> Result<(), AppError> {
    if value <= Decimal::ZERO {
        return Err(AppError::ValidationError(format!(
            "El campo '{}' debe ser mayor que cero",
            field
        )));
    }
    Ok(())
}

/// Validar que un valor esté en una lista de valores permitidos
pub fn require_one_of(value: &str, allowed: &[&str], field: &str) -> Result<(), AppError> {
    if !allowed.contains(&value) {
        return Err(AppError::ValidationError(format!(
            "El campo '{}' debe ser uno de: {}",
            field,
            allowed.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_not_empty() {
        assert!(require_not_empty("hola", "name").is_ok());
        assert!(require_not_empty("   ", "name").is_err());
        assert!(require_not_empty("", "name").is_err());
    }

    #[test]
    fn test_require_min_length() {
        assert!(require_min_length("ab", 2, "name").is_ok());
        assert!(require_min_length("a", 2, "name").is_err());
    }

    #[test]
    fn test_require_email() {
        assert!(require_email("test@example.com").is_ok());
        assert!(require_email("invalid-email").is_err());
        assert!(require_email("test@").is_err());
    }

    #[test]
    fn test_require_positive_price() {
        assert!(require_positive_price(Decimal::new(100, 0), "daily_price").is_ok());
        assert!(require_positive_price(Decimal::ZERO, "daily_price").is_err());
        assert!(require_positive_price(Decimal::new(-5, 0), "daily_price").is_err());
    }

    #[test]
    fn test_require_one_of() {
        assert!(require_one_of("manual", &["manual", "automatic"], "transmission").is_ok());
        assert!(require_one_of("cvt", &["manual", "automatic"], "transmission").is_err());
    }
}
