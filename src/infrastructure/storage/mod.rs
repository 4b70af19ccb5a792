use crate::core::errors::PortalError;
use crate::core::models::{DoctorProfile, PatientProfile};
use async_trait::async_trait;

/// Client seam for the hosted profile store (the `doctors` and `patients`
/// collections). Lookups are select-single-by-equality on the user ID.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn insert_doctor(&self, profile: DoctorProfile) -> Result<(), PortalError>;
    async fn insert_patient(&self, profile: PatientProfile) -> Result<(), PortalError>;
    async fn find_doctor(&self, user_id: &str) -> Result<Option<DoctorProfile>, PortalError>;
    async fn find_patient(&self, user_id: &str) -> Result<Option<PatientProfile>, PortalError>;
}

pub mod in_memory;
