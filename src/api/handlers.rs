use crate::{
    api::models::*,
    core::{
        errors::PortalError,
        models::{AppLog, SessionRecord, SignupForm},
        services::AccountService,
    },
    infrastructure::{
        auth::in_memory::InMemoryAuthBackend, logging::in_memory::InMemoryLogging,
        session::in_memory::InMemorySessionStore, storage::in_memory::InMemoryProfileStore,
    },
};
use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use http::header;

use std::sync::Arc;

type Portal = AccountService<InMemoryLogging, InMemoryAuthBackend, InMemoryProfileStore, InMemorySessionStore>;

// Middleware to validate JWT
async fn auth_middleware(
    State(service): State<Arc<Portal>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| PortalError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| PortalError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: Arc<Portal>) -> Router {
    let protected_routes = Router::new()
        .route("/auth/logout", axum::routing::post(logout))
        .route("/session", axum::routing::get(current_session))
        .route("/logs", axum::routing::get(get_app_logs))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/auth/signup", axum::routing::post(signup))
        .route("/auth/login", axum::routing::post(login))
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account and profile row created", body = SignupResponse),
        (status = 400, description = "Missing field or short password", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn signup(
    State(service): State<Arc<Portal>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let receipt = service
        .sign_up(SignupForm {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
            specialization: req.specialization,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(SignupResponse { user_id: receipt.user_id })))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login(
    State(service): State<Arc<Portal>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let success = service.log_in(&req.email, &req.password).await?;
    Ok(Json(LoginResponse {
        access_token: success.access_token,
        redirect_to: success.redirect_to.to_string(),
        user: success.record,
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cleared"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn logout(State(service): State<Arc<Portal>>) -> Result<StatusCode, ApiError> {
    service.log_out().await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session record, null when logged out", body = SessionRecord),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn current_session(
    State(service): State<Arc<Portal>>,
) -> Result<Json<Option<SessionRecord>>, ApiError> {
    let record = service.current_session().await?;
    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Audit log entries", body = [AppLog]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_app_logs(State(service): State<Arc<Portal>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.app_logs().await?;
    Ok(Json(logs))
}
