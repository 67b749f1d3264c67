//! Repositorios
//!
//! Acceso a datos sobre PostgreSQL. Cada repositorio recibe el pool como
//! handle inyectado; no hay estado global.

pub mod agency_repository;
pub mod availability_repository;
pub mod booking_repository;
pub mod car_repository;
