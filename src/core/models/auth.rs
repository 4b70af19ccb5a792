use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::Role;

/// Auxiliary fields attached to the auth identity at signup. The profile row
/// is the source of truth for these; the copy here mirrors what the signup
/// call sends along.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupMetadata {
    pub name: String,
    pub specialization: String,
    pub role: Role,
}

/// Identity held by the auth backend, keyed by an opaque generated ID.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub metadata: SignupMetadata,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful password sign-in.
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub user: AuthUser,
    pub access_token: String,
}
