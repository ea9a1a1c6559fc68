/// Outcome of an admin login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
    /// The configured hash is missing or malformed
    Error,
}

/// Admin password check against a configured bcrypt hash
#[derive(Debug, Clone)]
pub struct AdminAuth {
    password_hash: String,
}

impl AdminAuth {
    pub fn new(password_hash: impl Into<String>) -> Self {
        Self {
            password_hash: password_hash.into(),
        }
    }

    pub fn verify(&self, password: &str) -> LoginOutcome {
        match bcrypt::verify(password, &self.password_hash) {
            Ok(true) => LoginOutcome::Accepted,
            Ok(false) => LoginOutcome::Rejected,
            Err(e) => {
                tracing::warn!("Admin password verification failed: {}", e);
                LoginOutcome::Error
            }
        }
    }
}
