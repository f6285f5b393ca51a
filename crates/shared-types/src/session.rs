//! The logged-in identity and where it is kept.
//!
//! Two storage scopes back the session: a durable one that survives browser
//! restarts and a tab-scoped one cleared when the browsing session ends. The
//! remember-me choice at login picks which one receives the identity; every
//! other part of the app only talks to [`SessionVault`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::AppError;

pub const USERNAME_KEY: &str = "username";
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const IS_ADMIN_KEY: &str = "isAdmin";

/// Identity written at login and read by every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub auth_token: String,
    pub is_admin: bool,
}

/// Which storage receives the session at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    /// Survives browser restarts.
    Durable,
    /// Cleared when the browsing session ends.
    Tab,
}

impl StorageScope {
    pub fn from_remember_me(remember_me: bool) -> Self {
        if remember_me {
            StorageScope::Durable
        } else {
            StorageScope::Tab
        }
    }
}

/// A string key/value store with browser-storage semantics.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
    /// Remove every key in this scope.
    fn clear(&self) -> Result<(), AppError>;
}

/// In-process store used off the web target and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

/// Both storage scopes behind one handle.
#[derive(Clone)]
pub struct SessionVault {
    durable: Rc<dyn SessionStore>,
    tab: Rc<dyn SessionStore>,
}

impl PartialEq for SessionVault {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.durable, &other.durable) && Rc::ptr_eq(&self.tab, &other.tab)
    }
}

impl std::fmt::Debug for SessionVault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVault").finish_non_exhaustive()
    }
}

impl SessionVault {
    pub fn new(durable: Rc<dyn SessionStore>, tab: Rc<dyn SessionStore>) -> Self {
        Self { durable, tab }
    }

    /// A vault backed by two fresh [`MemoryStore`]s.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()), Rc::new(MemoryStore::new()))
    }

    fn store(&self, scope: StorageScope) -> &dyn SessionStore {
        match scope {
            StorageScope::Durable => self.durable.as_ref(),
            StorageScope::Tab => self.tab.as_ref(),
        }
    }

    /// Write `session` into exactly one scope.
    pub fn save(&self, session: &Session, scope: StorageScope) -> Result<(), AppError> {
        let store = self.store(scope);
        store.set_item(USERNAME_KEY, &session.username)?;
        store.set_item(AUTH_TOKEN_KEY, &session.auth_token)?;
        store.set_item(IS_ADMIN_KEY, if session.is_admin { "true" } else { "false" })?;
        Ok(())
    }

    /// Stored username, durable scope first.
    pub fn username(&self) -> Option<String> {
        self.read(USERNAME_KEY)
    }

    /// The full stored session, if a username is present.
    pub fn current(&self) -> Option<Session> {
        let scope = [StorageScope::Durable, StorageScope::Tab]
            .into_iter()
            .find(|scope| non_empty(self.store(*scope).get_item(USERNAME_KEY)).is_some())?;
        let store = self.store(scope);
        Some(Session {
            username: store.get_item(USERNAME_KEY)?,
            auth_token: store.get_item(AUTH_TOKEN_KEY).unwrap_or_default(),
            is_admin: store.get_item(IS_ADMIN_KEY).as_deref() == Some("true"),
        })
    }

    /// Clear both scopes regardless of which one was written at login.
    ///
    /// Both clears are attempted even if the first fails; the first error is
    /// returned.
    pub fn sign_out(&self) -> Result<(), AppError> {
        let durable = self.durable.clear();
        let tab = self.tab.clear();
        durable.and(tab)
    }

    fn read(&self, key: &str) -> Option<String> {
        non_empty(self.durable.get_item(key)).or_else(|| non_empty(self.tab.get_item(key)))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
