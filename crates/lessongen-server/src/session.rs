//! Per-browser page state, keyed by a session cookie.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use lessongen_core::{Credential, FormState};
use tracing::debug;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "lessongen_session";

/// Sessions untouched for this long are dropped when a new one starts.
const IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

struct Session {
    form: FormState,
    last_seen: Instant,
}

pub struct SessionStore {
    stored_credential: Option<Credential>,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    /// Every new session starts from `stored_credential` (the secrets file).
    pub fn new(stored_credential: Option<Credential>) -> Self {
        Self {
            stored_credential,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn has_stored_credential(&self) -> bool {
        self.stored_credential.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Session id from the cookie, or a fresh one set on the returned jar.
    pub fn identify(&self, jar: CookieJar) -> (CookieJar, String) {
        if let Some(id) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) {
            return (jar, id);
        }
        let id = Uuid::new_v4().to_string();
        debug!(session = %id, "new session");
        let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
            .http_only(true)
            .same_site(SameSite::Strict)
            .path("/");
        (jar.add(cookie), id)
    }

    /// Run `f` on the session's form, creating the session on first use.
    /// The lock is held only for the duration of `f`.
    pub fn with_form<R>(&self, id: &str, f: impl FnOnce(&mut FormState) -> R) -> R {
        let now = Instant::now();
        let mut sessions = self.lock();
        if !sessions.contains_key(id) {
            sessions.retain(|_, s| now.duration_since(s.last_seen) < IDLE_TIMEOUT);
        }
        let session = sessions.entry(id.to_string()).or_insert_with(|| Session {
            form: FormState::new(self.stored_credential.clone()),
            last_seen: now,
        });
        session.last_seen = now;
        f(&mut session.form)
    }

    /// Read an existing session's form. Unknown ids yield `None`.
    pub fn read_form<R>(&self, id: &str, f: impl FnOnce(&FormState) -> R) -> Option<R> {
        self.lock().get(id).map(|s| f(&s.form))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
