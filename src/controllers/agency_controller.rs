use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::agency_dto::{AgencyResponse, AuthResponse, LoginRequest, RegisterAgencyRequest};
use crate::dto::booking_dto::AgencyBookingRow;
use crate::models::agency::Agency;
use crate::repositories::agency_repository::AgencyRepository;
use crate::repositories::booking_repository::BookingRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::generate_token;
use crate::utils::validation::{require_email, require_min_length};

pub struct AgencyController {
    repository: AgencyRepository,
    bookings: BookingRepository,
    config: EnvironmentConfig,
}

impl AgencyController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: AgencyRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
            config,
        }
    }

    pub async fn register(&self, request: RegisterAgencyRequest) -> Result<AuthResponse, AppError> {
        // Validar campos
        require_min_length(&request.name, 2, "name")?;
        require_email(&request.email)?;
        require_min_length(&request.password, 6, "password")?;
        require_min_length(&request.location, 2, "location")?;
        require_min_length(&request.phone, 6, "phone")?;

        // Verificar que el email no exista
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let agency = Agency::new(
            request.name,
            request.email,
            password_hash,
            request.location,
            request.phone,
        );

        let saved = self.repository.create(&agency).await?;

        let token = generate_token(saved.id, &saved.email, &self.config)?;

        Ok(AuthResponse {
            token,
            agency: AgencyResponse::from(saved),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        // Buscar agencia por email
        let agency = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &agency.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(agency.id, &agency.email, &self.config)?;

        Ok(AuthResponse {
            token,
            agency: AgencyResponse::from(agency),
        })
    }

    pub async fn get_profile(&self, agency_id: Uuid) -> Result<AgencyResponse, AppError> {
        let agency = self
            .repository
            .find_by_id(agency_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agencia no encontrada".to_string()))?;

        Ok(AgencyResponse::from(agency))
    }

    /// Reservas de todos los coches de la agencia autenticada,
    /// cada una con el título del coche, las más recientes primero
    pub async fn list_bookings(&self, agency_id: Uuid) -> Result<Vec<AgencyBookingRow>, AppError> {
        self.bookings.list_for_agency(agency_id).await
    }
}
