use std::time::Duration;

/// Key the serialized session record lives under, read by the dashboard pages.
pub const SESSION_KEY: &str = "user";

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const DOCTOR_DASHBOARD: &str = "doctor-dashboard.html";
pub const PATIENT_DASHBOARD: &str = "patient-dashboard.html";

/// How long the signup success message stays up before switching to the login modal.
pub const SIGNUP_SUCCESS_DELAY: Duration = Duration::from_secs(2);
/// How long the welcome message stays up before navigating to the dashboard.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(1);

// Audit log action names
pub const ACCOUNT_CREATED: &str = "account_created";
pub const SIGNUP_COMPENSATED: &str = "signup_compensated";
pub const USER_LOGGED_IN: &str = "user_logged_in";
pub const USER_LOGGED_OUT: &str = "user_logged_out";
