use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{DOCTOR_DASHBOARD, PATIENT_DASHBOARD};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Doctor,
    Patient,
}

impl Role {
    pub fn dashboard(&self) -> &'static str {
        match self {
            Role::Doctor => DOCTOR_DASHBOARD,
            Role::Patient => PATIENT_DASHBOARD,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        };
        write!(f, "{}", s)
    }
}

/// Order in which the collections are probed during login. Doctors are
/// checked first; when an identity somehow has a row in both collections,
/// the doctor row wins. This is a deliberate tie-break.
pub const PROFILE_LOOKUP_ORDER: [Role; 2] = [Role::Doctor, Role::Patient];

/// Row in the `doctors` collection. The appointments and schedule arrays
/// start empty and are filled in by the scheduling pages.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DoctorProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub appointments: Vec<String>,
    pub schedule: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl DoctorProfile {
    pub fn new(user_id: &str, name: &str, email: &str, specialization: &str) -> Self {
        DoctorProfile {
            user_id: user_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            specialization: specialization.to_string(),
            appointments: Vec::new(),
            schedule: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Row in the `patients` collection.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PatientProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub medical_history: Vec<String>,
    pub appointments: Vec<String>,
    pub prescriptions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PatientProfile {
    pub fn new(user_id: &str, name: &str, email: &str, specialization: &str) -> Self {
        PatientProfile {
            user_id: user_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            specialization: specialization.to_string(),
            medical_history: Vec::new(),
            appointments: Vec::new(),
            prescriptions: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Resolved profile for an authenticated identity. An identity has a row in
/// at most one of the two collections.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    Doctor(DoctorProfile),
    Patient(PatientProfile),
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::Doctor(_) => Role::Doctor,
            Profile::Patient(_) => Role::Patient,
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            Profile::Doctor(p) => &p.user_id,
            Profile::Patient(p) => &p.user_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Profile::Doctor(p) => &p.name,
            Profile::Patient(p) => &p.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Profile::Doctor(p) => &p.email,
            Profile::Patient(p) => &p.email,
        }
    }

    pub fn welcome_message(&self) -> String {
        match self {
            Profile::Doctor(p) => format!("Welcome Dr. {}!", p.name),
            Profile::Patient(p) => format!("Welcome {}!", p.name),
        }
    }

    pub fn dashboard(&self) -> &'static str {
        self.role().dashboard()
    }
}
