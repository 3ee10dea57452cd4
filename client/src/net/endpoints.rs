//! Backend endpoint registry and auth header helpers.
//!
//! The base address is fixed at build time from `ATRIUM_API_BASE_URL`
//! (falling back to the local development server) and every endpoint is
//! `base + path`. Requests authenticate with a bearer token that the auth
//! flow leaves in `localStorage` under `TOKEN_STORAGE_KEY`.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::util::storage::KeyValueStore;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const TOKEN_STORAGE_KEY: &str = "token";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";

/// Header name -> value.
pub type Headers = BTreeMap<&'static str, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub login: String,
    pub register: String,
    pub verify_email: String,
    pub resend_verification: String,
    pub reactivate: String,
    pub deactivate: String,
    pub delete_account: String,
    pub profile: String,
    pub update_profile: String,
    pub add_recovery_email: String,
    pub verify_recovery_email: String,
    pub remove_recovery_email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiEndpoints {
    pub chat: String,
    pub index: String,
    pub clear_session: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadEndpoints {
    pub clear_session: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackEndpoints {
    pub submit: String,
}

/// Absolute URLs for every backend operation, grouped by domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub base_url: String,
    pub auth: AuthEndpoints,
    pub ai: AiEndpoints,
    pub upload: UploadEndpoints,
    pub feedback: FeedbackEndpoints,
}

impl Endpoints {
    /// Build the registry under `base_url`. Trailing slashes are dropped.
    #[must_use]
    pub fn with_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let url = |path: &str| format!("{base}{path}");
        Self {
            base_url: base.to_owned(),
            auth: AuthEndpoints {
                login: url("/auth/login"),
                register: url("/auth/register"),
                verify_email: url("/auth/verify-email"),
                resend_verification: url("/auth/resend-verification"),
                reactivate: url("/auth/reactivate"),
                deactivate: url("/auth/deactivate"),
                delete_account: url("/auth/delete-account"),
                profile: url("/auth/profile"),
                update_profile: url("/auth/profile/update"),
                add_recovery_email: url("/auth/recovery-email/add"),
                verify_recovery_email: url("/auth/recovery-email/verify"),
                remove_recovery_email: url("/auth/recovery-email/remove"),
            },
            ai: AiEndpoints {
                chat: url("/ai/chat"),
                index: url("/ai/index"),
                clear_session: url("/ai/clear-session"),
            },
            upload: UploadEndpoints { clear_session: url("/upload/clear-session") },
            feedback: FeedbackEndpoints { submit: url("/feedback/submit") },
        }
    }

    /// Every `(domain, operation, url)` triple in the registry.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &'static str, &str)> {
        let auth = &self.auth;
        vec![
            ("auth", "login", auth.login.as_str()),
            ("auth", "register", auth.register.as_str()),
            ("auth", "verify_email", auth.verify_email.as_str()),
            ("auth", "resend_verification", auth.resend_verification.as_str()),
            ("auth", "reactivate", auth.reactivate.as_str()),
            ("auth", "deactivate", auth.deactivate.as_str()),
            ("auth", "delete_account", auth.delete_account.as_str()),
            ("auth", "profile", auth.profile.as_str()),
            ("auth", "update_profile", auth.update_profile.as_str()),
            ("auth", "add_recovery_email", auth.add_recovery_email.as_str()),
            ("auth", "verify_recovery_email", auth.verify_recovery_email.as_str()),
            ("auth", "remove_recovery_email", auth.remove_recovery_email.as_str()),
            ("ai", "chat", self.ai.chat.as_str()),
            ("ai", "index", self.ai.index.as_str()),
            ("ai", "clear_session", self.ai.clear_session.as_str()),
            ("upload", "clear_session", self.upload.clear_session.as_str()),
            ("feedback", "submit", self.feedback.submit.as_str()),
        ]
    }

    /// Resolve a `(domain, operation)` pair by name.
    #[must_use]
    pub fn lookup(&self, domain: &str, operation: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(d, op, _)| *d == domain && *op == operation)
            .map(|(_, _, url)| url)
    }
}

/// Build-time base URL, or the local development default.
#[must_use]
pub fn configured_base_url() -> &'static str {
    option_env!("ATRIUM_API_BASE_URL")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}

static ENDPOINTS: LazyLock<Endpoints> = LazyLock::new(|| Endpoints::with_base(configured_base_url()));

/// Process-wide registry, built on first use.
pub fn endpoints() -> &'static Endpoints {
    &ENDPOINTS
}

/// JSON request headers plus bearer auth when `store` holds a token.
pub fn auth_headers_from(store: &dyn KeyValueStore) -> Headers {
    let mut headers = multipart_auth_headers_from(store);
    headers.insert(CONTENT_TYPE, "application/json".to_owned());
    headers
}

/// Bearer auth only; multipart bodies set their own content type.
pub fn multipart_auth_headers_from(store: &dyn KeyValueStore) -> Headers {
    let mut headers = Headers::new();
    if let Some(token) = stored_token(store) {
        headers.insert(AUTHORIZATION, format!("Bearer {token}"));
    }
    headers
}

pub fn auth_headers() -> Headers {
    auth_headers_from(&default_store())
}

pub fn multipart_auth_headers() -> Headers {
    multipart_auth_headers_from(&default_store())
}

fn stored_token(store: &dyn KeyValueStore) -> Option<String> {
    store
        .load(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
}

#[cfg(feature = "hydrate")]
fn default_store() -> crate::util::storage::LocalStorageStore {
    crate::util::storage::LocalStorageStore
}

#[cfg(not(feature = "hydrate"))]
fn default_store() -> crate::util::storage::MemoryStore {
    crate::util::storage::MemoryStore::default()
}
