//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, fechas,
//! validación y JWT.

pub mod dates;
pub mod errors;
pub mod jwt;
pub mod validation;
