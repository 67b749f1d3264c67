use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::agency_controller::AgencyController;
use crate::dto::agency_dto::{AgencyResponse, AuthResponse, LoginRequest, RegisterAgencyRequest};
use crate::dto::booking_dto::AgencyBookingRow;
use crate::middleware::auth::AuthAgency;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_agency_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_agency))
        .route("/login", post(login_agency))
        .route("/me", get(get_profile))
        .route("/me/bookings", get(list_agency_bookings))
}

async fn register_agency(
    State(state): State<AppState>,
    Json(request): Json<RegisterAgencyRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let controller = AgencyController::new(state.pool.clone(), state.config.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn login_agency(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let controller = AgencyController::new(state.pool.clone(), state.config.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn get_profile(
    State(state): State<AppState>,
    auth: AuthAgency,
) -> Result<Json<AgencyResponse>, AppError> {
    let controller = AgencyController::new(state.pool.clone(), state.config.clone());
    let response = controller.get_profile(auth.agency_id).await?;
    Ok(Json(response))
}

async fn list_agency_bookings(
    State(state): State<AppState>,
    auth: AuthAgency,
) -> Result<Json<Vec<AgencyBookingRow>>, AppError> {
    let controller = AgencyController::new(state.pool.clone(), state.config.clone());
    let response = controller.list_bookings(auth.agency_id).await?;
    Ok(Json(response))
}
