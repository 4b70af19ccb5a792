use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::profile::{Profile, Role};

/// Summary of the logged-in user, serialized under the fixed `"user"` key and
/// read by the dashboard pages. Overwritten on each login, cleared on logout;
/// no expiry.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Carried for doctors only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    pub role: Role,
}

impl SessionRecord {
    pub fn from_profile(id: &str, profile: &Profile) -> Self {
        SessionRecord {
            id: id.to_string(),
            email: profile.email().to_string(),
            name: profile.name().to_string(),
            specialization: match profile {
                Profile::Doctor(p) => Some(p.specialization.clone()),
                Profile::Patient(_) => None,
            },
            role: profile.role(),
        }
    }
}
