use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum PortalError {
    /// A required form field was left empty. Raised locally, before any remote call.
    #[error("Please fill all fields")]
    MissingFields,

    /// Password shorter than the minimum. Raised locally, before any remote call.
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    /// The auth backend already holds an identity for this email
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// Password sign-in was rejected by the auth backend
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Auth identity with the given ID not found
    #[error("User {0} not found")]
    UserNotFound(String),

    /// Authenticated, but neither the doctors nor the patients collection has a row
    #[error("Profile not found. Please contact support.")]
    ProfileNotFound,

    /// A submission on the same form is still pending
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// Missing or invalid bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Profile store operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Session store operation failed
    #[error("Session error: {0}")]
    SessionError(String),

    /// Audit logging failed
    #[error("Logging error: {0}")]
    LoggingError(String),

    /// Catch-all for unexpected failures
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
