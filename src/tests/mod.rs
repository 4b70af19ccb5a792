mod dialog_tests;
mod signup_tests;

use crate::core::controller::FormController;
use crate::core::models::{Role, SignupForm};
use crate::core::services::AccountService;
use crate::infrastructure::auth::in_memory::InMemoryAuthBackend;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::session::in_memory::InMemorySessionStore;
use crate::infrastructure::storage::in_memory::InMemoryProfileStore;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-secret";

/// Shared handles to the in-memory backends, for asserting on their state
/// after service calls.
pub struct TestBackends {
    pub auth: InMemoryAuthBackend,
    pub profiles: InMemoryProfileStore,
    pub sessions: InMemorySessionStore,
    pub logging: InMemoryLogging,
}

pub type TestService =
    AccountService<InMemoryLogging, InMemoryAuthBackend, InMemoryProfileStore, InMemorySessionStore>;

pub fn create_test_service() -> (TestService, TestBackends) {
    let auth = InMemoryAuthBackend::new(TEST_SECRET.to_string());
    let profiles = InMemoryProfileStore::new();
    let sessions = InMemorySessionStore::new();
    let logging = InMemoryLogging::new();
    let service = AccountService::new(
        logging.clone(),
        auth.clone(),
        profiles.clone(),
        sessions.clone(),
        TEST_SECRET.to_string(),
    );
    (
        service,
        TestBackends {
            auth,
            profiles,
            sessions,
            logging,
        },
    )
}

pub fn create_test_controller() -> (
    Arc<FormController<InMemoryLogging, InMemoryAuthBackend, InMemoryProfileStore, InMemorySessionStore>>,
    TestBackends,
) {
    let (service, backends) = create_test_service();
    (Arc::new(FormController::new(Arc::new(service))), backends)
}

pub fn doctor_form() -> SignupForm {
    SignupForm {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        password: "secret1".to_string(),
        role: Role::Doctor,
        specialization: "Cardiology".to_string(),
    }
}

pub fn patient_form() -> SignupForm {
    SignupForm {
        name: "Bob".to_string(),
        email: "bob@x.com".to_string(),
        password: "secret2".to_string(),
        role: Role::Patient,
        specialization: "General".to_string(),
    }
}
