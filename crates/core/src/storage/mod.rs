use crate::session::{Action, Session};
use anyhow::anyhow;
use std::sync::{Arc, Mutex};

/// Single-writer store for the current session.
///
/// Readers get an `Arc<Session>` and never block writers for longer than a
/// pointer swap. Every mutation goes through [`CampaignStore::dispatch`].
#[derive(Debug)]
pub struct CampaignStore {
    current: Mutex<Arc<Session>>,
}

impl CampaignStore {
    pub fn new(session: Session) -> Self {
        Self {
            current: Mutex::new(Arc::new(session)),
        }
    }

    pub fn snapshot(&self) -> anyhow::Result<Arc<Session>> {
        let guard = self
            .current
            .lock()
            .map_err(|_| anyhow!("campaign store lock poisoned"))?;
        Ok(Arc::clone(&guard))
    }

    /// Reduces `action` against the current session and swaps the result in.
    /// On error the current session is left untouched.
    pub fn dispatch(&self, action: Action) -> anyhow::Result<Arc<Session>> {
        let mut guard = self
            .current
            .lock()
            .map_err(|_| anyhow!("campaign store lock poisoned"))?;
        let next = Arc::new(guard.reduce(action)?);
        *guard = Arc::clone(&next);
        Ok(next)
    }
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new(Session::seeded())
    }
}
