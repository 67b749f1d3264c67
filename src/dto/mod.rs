//! DTOs de la API
//!
//! Requests y responses que cruzan la frontera HTTP.

pub mod agency_dto;
pub mod availability_dto;
pub mod booking_dto;
pub mod car_dto;
