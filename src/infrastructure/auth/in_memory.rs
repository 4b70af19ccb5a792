use crate::auth::jwt::JwtService;
use crate::core::errors::PortalError;
use crate::core::models::{AuthSession, AuthUser, SignupMetadata};
use crate::infrastructure::auth::AuthBackend;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

struct StoredIdentity {
    user: AuthUser,
    password_hash: String,
}

/// Stand-in for the hosted auth service. Clones share state, so a test can
/// hold one handle while the service owns another.
#[derive(Clone)]
pub struct InMemoryAuthBackend {
    identities: Arc<Mutex<HashMap<String, StoredIdentity>>>,
    emails: Arc<Mutex<HashMap<String, String>>>, // email -> user_id
    jwt: Arc<JwtService>,
}

impl InMemoryAuthBackend {
    pub fn new(jwt_secret: String) -> Self {
        InMemoryAuthBackend {
            identities: Arc::new(Mutex::new(HashMap::new())),
            emails: Arc::new(Mutex::new(HashMap::new())),
            jwt: Arc::new(JwtService::new(jwt_secret)),
        }
    }

    pub async fn user_count(&self) -> usize {
        self.identities.lock().await.len()
    }
}

#[async_trait]
impl AuthBackend for InMemoryAuthBackend {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignupMetadata,
    ) -> Result<AuthUser, PortalError> {
        let mut emails = self.emails.lock().await;
        if emails.contains_key(email) {
            return Err(PortalError::EmailAlreadyRegistered(email.to_string()));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| PortalError::InternalServerError(format!("Password hashing error: {}", e)))?;

        let user = AuthUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            metadata,
            created_at: Utc::now(),
        };

        emails.insert(email.to_string(), user.id.clone());
        self.identities.lock().await.insert(
            user.id.clone(),
            StoredIdentity {
                user: user.clone(),
                password_hash,
            },
        );
        Ok(user)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, PortalError> {
        let user_id = self
            .emails
            .lock()
            .await
            .get(email)
            .cloned()
            .ok_or(PortalError::InvalidCredentials)?;

        let identities = self.identities.lock().await;
        let identity = identities
            .get(&user_id)
            .ok_or(PortalError::InvalidCredentials)?;

        let verified = bcrypt::verify(password, &identity.password_hash)
            .map_err(|e| PortalError::InternalServerError(format!("Password verification error: {}", e)))?;
        if !verified {
            return Err(PortalError::InvalidCredentials);
        }

        let access_token = self
            .jwt
            .generate_token(&identity.user.id, &identity.user.metadata.role.to_string())?;
        Ok(AuthSession {
            user: identity.user.clone(),
            access_token,
        })
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), PortalError> {
        // Locks are taken in the same order as sign_up.
        let mut emails = self.emails.lock().await;
        let mut identities = self.identities.lock().await;
        let identity = identities
            .remove(user_id)
            .ok_or_else(|| PortalError::UserNotFound(user_id.to_string()))?;
        emails.remove(&identity.user.email);
        Ok(())
    }
}
