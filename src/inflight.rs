//! In-Flight Requests
//!
//! Tracks which actions are awaiting a server response. A second trigger
//! for the same key is rejected until the first one settles.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::{Result, UiError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKey {
    /// Like toggle, keyed by endpoint
    Like(String),
    /// Keyed by delete endpoint
    Delete(String),
    Edit(u32),
    /// Comment or reply creation, keyed by form action and parent id
    Post(String),
}

#[derive(Debug, Clone, Default)]
pub struct InFlight {
    keys: Rc<RefCell<HashSet<ActionKey>>>,
}

/// Releases its key when dropped
#[derive(Debug)]
pub struct InFlightGuard {
    keys: Rc<RefCell<HashSet<ActionKey>>>,
    key: ActionKey,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self, key: ActionKey) -> Result<InFlightGuard> {
        if !self.keys.borrow_mut().insert(key.clone()) {
            log::debug!("[inflight] rejected duplicate {:?}", key);
            return Err(UiError::Busy);
        }
        Ok(InFlightGuard { keys: Rc::clone(&self.keys), key })
    }

    pub fn is_busy(&self, key: &ActionKey) -> bool {
        self.keys.borrow().contains(key)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.keys.borrow_mut().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_is_rejected_until_released() {
        let inflight = InFlight::new();
        let guard = inflight.try_acquire(ActionKey::Delete("/c/4/eliminar/".into())).unwrap();
        assert!(inflight.is_busy(&ActionKey::Delete("/c/4/eliminar/".into())));
        assert!(matches!(inflight.try_acquire(ActionKey::Delete("/c/4/eliminar/".into())), Err(UiError::Busy)));

        drop(guard);
        assert!(!inflight.is_busy(&ActionKey::Delete("/c/4/eliminar/".into())));
        assert!(inflight.try_acquire(ActionKey::Delete("/c/4/eliminar/".into())).is_ok());
    }

    #[test]
    fn test_keys_are_independent() {
        let inflight = InFlight::new();
        let _like = inflight.try_acquire(ActionKey::Like("/like/1/".into())).unwrap();
        let _other = inflight.try_acquire(ActionKey::Like("/like/2/".into())).unwrap();
        let _edit = inflight.try_acquire(ActionKey::Edit(1)).unwrap();
        assert!(inflight.try_acquire(ActionKey::Delete("/c/1/eliminar/".into())).is_ok());
    }

    #[test]
    fn test_clones_share_state() {
        let inflight = InFlight::new();
        let shared = inflight.clone();
        let _guard = inflight.try_acquire(ActionKey::Post("/a/|".into())).unwrap();
        assert!(shared.is_busy(&ActionKey::Post("/a/|".into())));
    }
}
