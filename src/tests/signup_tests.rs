use crate::core::errors::PortalError;
use crate::core::models::{AppLog, DoctorProfile, PatientProfile};
use crate::core::services::AccountService;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::ProfileStore;
use crate::tests::{create_test_service, doctor_form, patient_form, TEST_SECRET};
use crate::infrastructure::auth::in_memory::InMemoryAuthBackend;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::session::in_memory::InMemorySessionStore;
use async_trait::async_trait;

#[tokio::test]
async fn test_signup_rejects_empty_field_without_remote_call() {
    let (service, backends) = create_test_service();

    let mut form = doctor_form();
    form.name = "   ".to_string();
    let result = service.sign_up(form).await;
    assert!(matches!(result, Err(PortalError::MissingFields)));

    let mut form = doctor_form();
    form.specialization = String::new();
    let result = service.sign_up(form).await;
    assert!(matches!(result, Err(PortalError::MissingFields)));

    assert_eq!(backends.auth.user_count().await, 0);
    assert_eq!(backends.profiles.doctor_count().await, 0);
    assert_eq!(backends.profiles.patient_count().await, 0);
}

#[tokio::test]
async fn test_signup_rejects_short_password_without_remote_call() {
    let (service, backends) = create_test_service();

    let mut form = doctor_form();
    form.password = "abc12".to_string();
    let result = service.sign_up(form).await;
    assert!(matches!(result, Err(PortalError::PasswordTooShort)));

    assert_eq!(backends.auth.user_count().await, 0);
}

#[tokio::test]
async fn test_signup_doctor_inserts_exactly_one_row() {
    let (service, backends) = create_test_service();

    let receipt = service.sign_up(doctor_form()).await.unwrap();

    assert_eq!(backends.auth.user_count().await, 1);
    assert_eq!(backends.profiles.doctor_count().await, 1);
    assert_eq!(backends.profiles.patient_count().await, 0);

    let row = backends
        .profiles
        .find_doctor(&receipt.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.name, "Ann");
    assert_eq!(row.email, "ann@x.com");
    assert_eq!(row.specialization, "Cardiology");
    assert!(row.appointments.is_empty());
    assert!(row.schedule.is_empty());
}

#[tokio::test]
async fn test_signup_patient_inserts_exactly_one_row() {
    let (service, backends) = create_test_service();

    let receipt = service.sign_up(patient_form()).await.unwrap();

    assert_eq!(backends.profiles.doctor_count().await, 0);
    assert_eq!(backends.profiles.patient_count().await, 1);

    let row = backends
        .profiles
        .find_patient(&receipt.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.name, "Bob");
    assert!(row.medical_history.is_empty());
    assert!(row.appointments.is_empty());
    assert!(row.prescriptions.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_email_surfaces_backend_error() {
    let (service, backends) = create_test_service();

    service.sign_up(doctor_form()).await.unwrap();
    let result = service.sign_up(doctor_form()).await;
    assert!(matches!(result, Err(PortalError::EmailAlreadyRegistered(_))));
    assert_eq!(backends.auth.user_count().await, 1);
}

/// Profile store that rejects every insert, to exercise the compensation
/// path of the two-phase signup.
#[derive(Clone)]
struct FailingProfileStore;

#[async_trait]
impl ProfileStore for FailingProfileStore {
    async fn insert_doctor(&self, _profile: DoctorProfile) -> Result<(), PortalError> {
        Err(PortalError::StorageError("insert rejected".to_string()))
    }

    async fn insert_patient(&self, _profile: PatientProfile) -> Result<(), PortalError> {
        Err(PortalError::StorageError("insert rejected".to_string()))
    }

    async fn find_doctor(&self, _user_id: &str) -> Result<Option<DoctorProfile>, PortalError> {
        Ok(None)
    }

    async fn find_patient(&self, _user_id: &str) -> Result<Option<PatientProfile>, PortalError> {
        Ok(None)
    }
}

#[tokio::test]
async fn test_signup_insert_failure_deletes_auth_identity() {
    let auth = InMemoryAuthBackend::new(TEST_SECRET.to_string());
    let service = AccountService::new(
        InMemoryLogging::new(),
        auth.clone(),
        FailingProfileStore,
        InMemorySessionStore::new(),
        TEST_SECRET.to_string(),
    );

    let result = service.sign_up(doctor_form()).await;
    match result {
        Err(PortalError::StorageError(msg)) => assert_eq!(msg, "insert rejected"),
        other => panic!("expected storage error, got {:?}", other.map(|r| r.user_id)),
    }

    // The half-created identity was compensated away.
    assert_eq!(auth.user_count().await, 0);
}

/// Audit sink that rejects every write.
#[derive(Clone)]
struct FailingLogger;

#[async_trait]
impl LoggingService for FailingLogger {
    async fn log_action(
        &self,
        _action: &str,
        _details: serde_json::Value,
        _user_id: Option<&str>,
    ) -> Result<(), PortalError> {
        Err(PortalError::LoggingError("audit sink down".to_string()))
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, PortalError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_signup_insert_failure_surfaces_even_when_audit_write_fails() {
    let auth = InMemoryAuthBackend::new(TEST_SECRET.to_string());
    let service = AccountService::new(
        FailingLogger,
        auth.clone(),
        FailingProfileStore,
        InMemorySessionStore::new(),
        TEST_SECRET.to_string(),
    );

    let result = service.sign_up(doctor_form()).await;
    match result {
        Err(PortalError::StorageError(msg)) => assert_eq!(msg, "insert rejected"),
        other => panic!("expected storage error, got {:?}", other.map(|r| r.user_id)),
    }

    assert_eq!(auth.user_count().await, 0);
}
