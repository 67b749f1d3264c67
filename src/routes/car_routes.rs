use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::availability_controller::AvailabilityController;
use crate::controllers::car_controller::CarController;
use crate::dto::availability_dto::{AddAvailabilityRequest, AvailabilityResponse};
use crate::dto::car_dto::{CarFilters, CarResponse, CarSearchResponse, CreateCarRequest};
use crate::middleware::auth::AuthAgency;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_car))
        .route("/", get(search_cars))
        .route("/:id", get(get_car))
        .route("/:id/availability", post(add_availability))
        .route("/:id/availability", get(get_availability))
}

async fn create_car(
    State(state): State<AppState>,
    auth: AuthAgency,
    Json(request): Json<CreateCarRequest>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.create(auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn search_cars(
    State(state): State<AppState>,
    Query(filters): Query<CarFilters>,
) -> Result<Json<Vec<CarSearchResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.search(filters).await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarSearchResponse>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn add_availability(
    State(state): State<AppState>,
    auth: AuthAgency,
    Path(id): Path<Uuid>,
    Json(request): Json<AddAvailabilityRequest>,
) -> Result<Json<Vec<AvailabilityResponse>>, AppError> {
    let controller = AvailabilityController::new(state.pool.clone());
    let response = controller.add(auth.agency_id, id, request).await?;
    Ok(Json(response))
}

async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AvailabilityResponse>>, AppError> {
    let controller = AvailabilityController::new(state.pool.clone());
    let response = controller.list(id).await?;
    Ok(Json(response))
}
