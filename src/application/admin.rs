//! Admin gate
//!
//! A shared-secret check that unlocks the admin commands. The secret and the
//! unlocked flag both sit in the board directory in plain text, so this only
//! keeps casual users out of the admin commands. It is not authentication.

use crate::error::{CrewboardError, Result};
use crate::infrastructure::KeyValueStore;
use std::rc::Rc;
use tracing::{info, warn};

/// Storage key of the unlocked flag
pub const AUTH_FLAG_KEY: &str = "is_authenticated";

pub struct AdminGate {
    storage: Rc<dyn KeyValueStore>,
    passphrase: String,
}

impl AdminGate {
    pub fn new(storage: Rc<dyn KeyValueStore>, passphrase: impl Into<String>) -> Self {
        AdminGate {
            storage,
            passphrase: passphrase.into(),
        }
    }

    /// Whether a previous login left the gate open
    pub fn is_unlocked(&self) -> Result<bool> {
        Ok(self.storage.get(AUTH_FLAG_KEY)?.as_deref() == Some("true"))
    }

    /// Compare `code` with the passphrase; on a match, remember the unlock.
    pub fn login(&self, code: &str) -> Result<bool> {
        if code != self.passphrase {
            warn!("admin login rejected");
            return Ok(false);
        }
        self.storage.set(AUTH_FLAG_KEY, "true")?;
        info!("admin area unlocked");
        Ok(true)
    }

    pub fn logout(&self) -> Result<()> {
        self.storage.remove(AUTH_FLAG_KEY)?;
        info!("admin area locked");
        Ok(())
    }

    /// Fail with `AdminLocked` unless the gate is open
    pub fn require_unlocked(&self) -> Result<()> {
        if self.is_unlocked()? {
            Ok(())
        } else {
            Err(CrewboardError::AdminLocked)
        }
    }
}
