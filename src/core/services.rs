use crate::auth::jwt::{Claims, JwtService};
use crate::constants::{
    ACCOUNT_CREATED, MIN_PASSWORD_LENGTH, SIGNUP_COMPENSATED, USER_LOGGED_IN, USER_LOGGED_OUT,
};
use crate::core::errors::PortalError;
use crate::core::models::{
    AppLog, DoctorProfile, PatientProfile, Profile, Role, SessionRecord, SignupForm,
    SignupMetadata, PROFILE_LOOKUP_ORDER,
};
use crate::infrastructure::auth::AuthBackend;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::session::SessionStore;
use crate::infrastructure::storage::ProfileStore;
use serde_json::json;
use tracing::{error, info};

/// Outcome of a successful signup. The new identity still has to log in
/// before a session exists.
#[derive(Clone, Debug)]
pub struct SignupReceipt {
    pub user_id: String,
}

/// Outcome of a successful login: the resolved profile, the stored session
/// record, and where to send the user next.
#[derive(Clone, Debug)]
pub struct LoginSuccess {
    pub profile: Profile,
    pub record: SessionRecord,
    pub access_token: String,
    pub redirect_to: &'static str,
    pub welcome: String,
}

pub struct AccountService<L: LoggingService, A: AuthBackend, P: ProfileStore, S: SessionStore> {
    logging: L,
    auth: A,
    profiles: P,
    sessions: S,
    jwt_service: JwtService,
}

impl<L: LoggingService, A: AuthBackend, P: ProfileStore, S: SessionStore>
    AccountService<L, A, P, S>
{
    pub fn new(logging: L, auth: A, profiles: P, sessions: S, jwt_secret: String) -> Self {
        AccountService {
            logging,
            auth,
            profiles,
            sessions,
            jwt_service: JwtService::new(jwt_secret),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, PortalError> {
        self.jwt_service.validate_token(token)
    }

    fn validate_signup(form: &SignupForm) -> Result<(), PortalError> {
        if form.name.trim().is_empty()
            || form.email.trim().is_empty()
            || form.password.is_empty()
            || form.specialization.trim().is_empty()
        {
            return Err(PortalError::MissingFields);
        }
        if form.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PortalError::PasswordTooShort);
        }
        Ok(())
    }

    /// Two-phase signup: create the auth identity, then insert exactly one
    /// profile row for it. If the insert fails the identity is deleted again,
    /// so no orphan survives, and the insert error is surfaced.
    pub async fn sign_up(&self, form: SignupForm) -> Result<SignupReceipt, PortalError> {
        Self::validate_signup(&form)?;

        let name = form.name.trim();
        let email = form.email.trim();
        let specialization = form.specialization.trim();

        info!("Creating auth identity for {}", email);
        let metadata = SignupMetadata {
            name: name.to_string(),
            specialization: specialization.to_string(),
            role: form.role,
        };
        let user = self.auth.sign_up(email, &form.password, metadata).await?;

        let inserted = match form.role {
            Role::Doctor => {
                self.profiles
                    .insert_doctor(DoctorProfile::new(&user.id, name, email, specialization))
                    .await
            }
            Role::Patient => {
                self.profiles
                    .insert_patient(PatientProfile::new(&user.id, name, email, specialization))
                    .await
            }
        };

        if let Err(insert_err) = inserted {
            error!("Profile insert failed for {}: {}", user.id, insert_err);
            match self.auth.delete_user(&user.id).await {
                Ok(()) => {
                    let logged = self
                        .logging
                        .log_action(
                            SIGNUP_COMPENSATED,
                            json!({ "user_id": user.id, "email": email }),
                            Some(&user.id),
                        )
                        .await;
                    if let Err(log_err) = logged {
                        // The caller gets the insert error either way.
                        error!("Audit write failed for {}: {}", user.id, log_err);
                    }
                }
                Err(cleanup_err) => {
                    // The identity is now an orphan; keep the original error.
                    error!("Compensating delete failed for {}: {}", user.id, cleanup_err);
                }
            }
            return Err(insert_err);
        }

        self.logging
            .log_action(
                ACCOUNT_CREATED,
                json!({ "user_id": user.id, "email": email, "role": form.role.to_string() }),
                Some(&user.id),
            )
            .await?;
        info!("Signup complete for {} as {}", user.id, form.role);

        Ok(SignupReceipt { user_id: user.id })
    }

    /// Authenticates from scratch (the source behavior: no session reuse),
    /// resolves the profile doctor-first, and writes the session record.
    pub async fn log_in(&self, email: &str, password: &str) -> Result<LoginSuccess, PortalError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(PortalError::MissingFields);
        }

        let session = self.auth.sign_in_with_password(email, password).await?;
        info!("Signed in {}", session.user.id);

        let profile = self.resolve_profile(&session.user.id).await?;
        let record = SessionRecord::from_profile(&session.user.id, &profile);
        self.sessions.write(record.clone()).await?;

        self.logging
            .log_action(
                USER_LOGGED_IN,
                json!({ "user_id": record.id, "role": record.role.to_string() }),
                Some(&record.id),
            )
            .await?;

        Ok(LoginSuccess {
            redirect_to: profile.dashboard(),
            welcome: profile.welcome_message(),
            access_token: session.access_token,
            record,
            profile,
        })
    }

    async fn resolve_profile(&self, user_id: &str) -> Result<Profile, PortalError> {
        for role in PROFILE_LOOKUP_ORDER {
            let found = match role {
                Role::Doctor => self.profiles.find_doctor(user_id).await?.map(Profile::Doctor),
                Role::Patient => self
                    .profiles
                    .find_patient(user_id)
                    .await?
                    .map(Profile::Patient),
            };
            if let Some(profile) = found {
                return Ok(profile);
            }
        }
        Err(PortalError::ProfileNotFound)
    }

    /// Session teardown: clears the stored record.
    pub async fn log_out(&self) -> Result<(), PortalError> {
        let record = self.sessions.read().await?;
        self.sessions.clear().await?;
        if let Some(record) = record {
            self.logging
                .log_action(USER_LOGGED_OUT, json!({ "user_id": record.id }), Some(&record.id))
                .await?;
        }
        Ok(())
    }

    pub async fn current_session(&self) -> Result<Option<SessionRecord>, PortalError> {
        self.sessions.read().await
    }

    pub async fn app_logs(&self) -> Result<Vec<AppLog>, PortalError> {
        self.logging.get_logs().await
    }
}
