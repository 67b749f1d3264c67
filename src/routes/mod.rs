pub mod agency_routes;
pub mod booking_routes;
pub mod car_routes;
