pub mod audit;
pub mod auth;
pub mod forms;
pub mod profile;
pub mod session;

pub use audit::AppLog;
pub use auth::{AuthSession, AuthUser, SignupMetadata};
pub use forms::{Credentials, SignupForm};
pub use profile::{DoctorProfile, PatientProfile, Profile, Role, PROFILE_LOOKUP_ORDER};
pub use session::SessionRecord;
