// src/services/session.rs

//! Where the logged-in identity comes from.
//!
//! Login is mocked: signing in hands out a fixed user record that the
//! favorites store then persists as the session.

use crate::error::Result;
use crate::models::{SessionConfig, User};

/// Establishes the identity used for a new session.
pub trait SessionProvider: Send + Sync {
    fn sign_in(&self) -> Result<User>;
}

/// Always signs in as the same configured user.
#[derive(Debug, Clone)]
pub struct MockSessionProvider {
    user: User,
}

impl MockSessionProvider {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.user())
    }
}

impl Default for MockSessionProvider {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl SessionProvider for MockSessionProvider {
    fn sign_in(&self) -> Result<User> {
        Ok(self.user.clone())
    }
}
