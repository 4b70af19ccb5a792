use utoipa::OpenApi;

use crate::{
    api::models::{ErrorResponse, LoginRequest, LoginResponse, SignupRequest, SignupResponse},
    core::models::{AppLog, Role, SessionRecord},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::signup,
        super::handlers::login,
        super::handlers::logout,
        super::handlers::current_session,
        super::handlers::get_app_logs
    ),
    components(schemas(
        SignupRequest,
        SignupResponse,
        LoginRequest,
        LoginResponse,
        ErrorResponse,
        SessionRecord,
        Role,
        AppLog
    )),
    info(
        title = "Careportal API",
        description = "Signup, login and session management for the doctor/patient portal",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
