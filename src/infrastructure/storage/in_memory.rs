use crate::core::errors::PortalError;
use crate::core::models::{DoctorProfile, PatientProfile};
use crate::infrastructure::storage::ProfileStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Stand-in for the hosted database, one map per collection, keyed by the
/// auth user ID. Clones share state.
#[derive(Clone)]
pub struct InMemoryProfileStore {
    doctors: Arc<Mutex<HashMap<String, DoctorProfile>>>,
    patients: Arc<Mutex<HashMap<String, PatientProfile>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        InMemoryProfileStore {
            doctors: Arc::new(Mutex::new(HashMap::new())),
            patients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn doctor_count(&self) -> usize {
        self.doctors.lock().await.len()
    }

    pub async fn patient_count(&self) -> usize {
        self.patients.lock().await.len()
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn insert_doctor(&self, profile: DoctorProfile) -> Result<(), PortalError> {
        let mut doctors = self.doctors.lock().await;
        if doctors.contains_key(&profile.user_id) {
            return Err(PortalError::StorageError(format!(
                "doctor row already exists for user {}",
                profile.user_id
            )));
        }
        doctors.insert(profile.user_id.clone(), profile);
        Ok(())
    }

    async fn insert_patient(&self, profile: PatientProfile) -> Result<(), PortalError> {
        let mut patients = self.patients.lock().await;
        if patients.contains_key(&profile.user_id) {
            return Err(PortalError::StorageError(format!(
                "patient row already exists for user {}",
                profile.user_id
            )));
        }
        patients.insert(profile.user_id.clone(), profile);
        Ok(())
    }

    async fn find_doctor(&self, user_id: &str) -> Result<Option<DoctorProfile>, PortalError> {
        Ok(self.doctors.lock().await.get(user_id).cloned())
    }

    async fn find_patient(&self, user_id: &str) -> Result<Option<PatientProfile>, PortalError> {
        Ok(self.patients.lock().await.get(user_id).cloned())
    }
}
