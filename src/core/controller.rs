//! Form controller: ties the modal dialogs to the account service and runs
//! one sequential task per submission. A submission moves through
//! validating, authenticating and profile resolution, and ends either
//! redirecting or failed; the modal status message tracks the progress.

use crate::constants::{LOGIN_REDIRECT_DELAY, SIGNUP_SUCCESS_DELAY};
use crate::core::dialogs::{ModalController, ModalKind, StatusMessage};
use crate::core::errors::PortalError;
use crate::core::models::{Credentials, SessionRecord, SignupForm};
use crate::core::services::{AccountService, SignupReceipt};
use crate::infrastructure::auth::AuthBackend;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::session::SessionStore;
use crate::infrastructure::storage::ProfileStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Where a successful login sends the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub target: &'static str,
    pub session: SessionRecord,
}

pub struct FormController<L: LoggingService, A: AuthBackend, P: ProfileStore, S: SessionStore> {
    service: Arc<AccountService<L, A, P, S>>,
    modals: Mutex<ModalController>,
    signup_pending: AtomicBool,
    login_pending: AtomicBool,
}

/// Re-enables the submit control when the submission task finishes, on every
/// exit path.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

fn acquire(flag: &AtomicBool) -> Result<PendingGuard<'_>, PortalError> {
    flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .map_err(|_| PortalError::SubmissionInFlight)?;
    Ok(PendingGuard(flag))
}

impl<L: LoggingService, A: AuthBackend, P: ProfileStore, S: SessionStore>
    FormController<L, A, P, S>
{
    pub fn new(service: Arc<AccountService<L, A, P, S>>) -> Self {
        FormController {
            service,
            modals: Mutex::new(ModalController::new()),
            signup_pending: AtomicBool::new(false),
            login_pending: AtomicBool::new(false),
        }
    }

    pub async fn open(&self, kind: ModalKind) {
        self.modals.lock().await.open(kind);
    }

    pub async fn close(&self, kind: ModalKind) {
        self.modals.lock().await.close(kind);
    }

    pub async fn backdrop_click(&self, target: ModalKind) {
        self.modals.lock().await.backdrop_click(target);
    }

    pub async fn is_visible(&self, kind: ModalKind) -> bool {
        self.modals.lock().await.modal(kind).is_visible()
    }

    pub async fn status(&self, kind: ModalKind) -> Option<StatusMessage> {
        self.modals.lock().await.modal(kind).status().cloned()
    }

    async fn set_status(&self, kind: ModalKind, status: StatusMessage) {
        self.modals.lock().await.set_status(kind, status);
    }

    /// Runs the signup flow. While it is pending the signup control is
    /// disabled: a second submit is rejected with `SubmissionInFlight`.
    /// On success the success message stays up for the fixed delay, then the
    /// signup modal closes and the login modal opens.
    pub async fn submit_signup(&self, form: SignupForm) -> Result<SignupReceipt, PortalError> {
        let _pending = acquire(&self.signup_pending)?;
        self.set_status(ModalKind::Signup, StatusMessage::info("Creating account..."))
            .await;

        match self.service.sign_up(form).await {
            Ok(receipt) => {
                self.set_status(
                    ModalKind::Signup,
                    StatusMessage::success("Signup successful! Please log in."),
                )
                .await;
                tokio::time::sleep(SIGNUP_SUCCESS_DELAY).await;

                let mut modals = self.modals.lock().await;
                modals.close(ModalKind::Signup);
                modals.open(ModalKind::Login);
                Ok(receipt)
            }
            Err(err) => {
                self.set_status(ModalKind::Signup, StatusMessage::error(err.to_string()))
                    .await;
                Err(err)
            }
        }
    }

    /// Runs the login flow. On success the welcome message stays up for the
    /// fixed delay, then the navigation target is handed back to the caller;
    /// on failure the modal shows the error and stays open for a resubmit.
    pub async fn submit_login(&self, credentials: Credentials) -> Result<Navigation, PortalError> {
        let _pending = acquire(&self.login_pending)?;
        self.set_status(ModalKind::Login, StatusMessage::info("Logging in..."))
            .await;

        match self
            .service
            .log_in(&credentials.email, &credentials.password)
            .await
        {
            Ok(success) => {
                self.set_status(ModalKind::Login, StatusMessage::success(success.welcome.clone()))
                    .await;
                tokio::time::sleep(LOGIN_REDIRECT_DELAY).await;
                Ok(Navigation {
                    target: success.redirect_to,
                    session: success.record,
                })
            }
            Err(err) => {
                self.set_status(ModalKind::Login, StatusMessage::error(err.to_string()))
                    .await;
                Err(err)
            }
        }
    }
}
