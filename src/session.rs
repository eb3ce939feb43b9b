use chrono::{DateTime, FixedOffset, Utc};

/// Who is using the client. Handed to the page at construction instead of
/// being looked up from global state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    expires_at: Option<DateTime<FixedOffset>>,
}

impl Session {
    pub fn new(token: Option<String>, expires_at: Option<DateTime<FixedOffset>>) -> Self {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self { token, expires_at }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now())
    }

    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> bool {
        match (&self.token, self.expires_at) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(exp)) => exp > now,
        }
    }

    /// Drops the credentials, e.g. after the server rejected them.
    pub fn invalidate(&mut self) {
        self.token = None;
        self.expires_at = None;
    }
}
