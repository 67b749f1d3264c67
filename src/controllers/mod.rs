//! Controladores
//!
//! Orquestación entre la capa HTTP y los repositorios.

pub mod agency_controller;
pub mod availability_controller;
pub mod booking_controller;
pub mod car_controller;
