use async_trait::async_trait;
use atelier_shared::pii::Masked;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: Masked<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: Uuid,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Credential-store capability. The storefront's login widget talks to this
/// interface only; whatever sits behind it is an external concern.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> CoreResult<Session>;
    async fn validate(&self, token: Uuid) -> CoreResult<Session>;
    async fn logout(&self, token: Uuid) -> CoreResult<()>;
}

/// Demo stand-in: accepts any credentials with a plausible email and keeps
/// sessions in process memory. Not an identity system.
pub struct DemoCredentialStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl DemoCredentialStore {
    pub fn new(ttl_seconds: i64) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, HashMap<Uuid, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| CoreError::InternalError("session store poisoned".to_string()))
    }
}

#[async_trait]
impl CredentialStore for DemoCredentialStore {
    async fn login(&self, credentials: &Credentials) -> CoreResult<Session> {
        let email = credentials.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::ValidationError(
                "email address is required".to_string(),
            ));
        }

        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4(),
            email: email.to_string(),
            issued_at: now,
            expires_at: now + self.ttl,
        };

        tracing::info!("Issuing demo session for {}", session.email);
        self.lock()?.insert(session.token, session.clone());
        Ok(session)
    }

    async fn validate(&self, token: Uuid) -> CoreResult<Session> {
        let mut sessions = self.lock()?;
        let session = sessions
            .get(&token)
            .cloned()
            .ok_or_else(|| CoreError::IdentityError("unknown session".to_string()))?;

        if session.is_expired() {
            sessions.remove(&token);
            return Err(CoreError::IdentityError("session expired".to_string()));
        }

        Ok(session)
    }

    async fn logout(&self, token: Uuid) -> CoreResult<()> {
        self.lock()?.remove(&token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: Masked::new("anything".to_string()),
        }
    }

    #[tokio::test]
    async fn any_credentials_with_an_email_are_accepted() {
        let store = DemoCredentialStore::new(3600);
        let session = store.login(&credentials("client@example.com")).await.unwrap();

        let validated = store.validate(session.token).await.unwrap();
        assert_eq!(validated.email, "client@example.com");
    }

    #[tokio::test]
    async fn empty_email_is_rejected() {
        let store = DemoCredentialStore::new(3600);
        let result = store.login(&credentials("   ")).await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[tokio::test]
    async fn logout_invalidates_the_session() {
        let store = DemoCredentialStore::new(3600);
        let session = store.login(&credentials("client@example.com")).await.unwrap();

        store.logout(session.token).await.unwrap();
        let result = store.validate(session.token).await;
        assert!(matches!(result, Err(CoreError::IdentityError(_))));
    }

    #[tokio::test]
    async fn expired_sessions_fail_validation() {
        let store = DemoCredentialStore::new(-1);
        let session = store.login(&credentials("client@example.com")).await.unwrap();

        let result = store.validate(session.token).await;
        assert!(matches!(result, Err(CoreError::IdentityError(_))));
    }

    #[test]
    fn password_is_masked_in_debug_output() {
        let creds = credentials("client@example.com");
        let debugged = format!("{:?}", creds);
        assert!(!debugged.contains("anything"));
        assert!(debugged.contains("********"));
    }
}
