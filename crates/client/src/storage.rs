//! Browser-backed [`SessionStore`]s.
//!
//! On the web target the durable scope is `localStorage` and the tab scope is
//! `sessionStorage`. Elsewhere (desktop builds, native tests) each scope is a
//! process-wide [`MemoryStore`].

use shared_types::{SessionStore, SessionVault, StorageScope};
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

/// The vault every view reads the session from.
pub fn session_vault() -> SessionVault {
    SessionVault::new(
        scoped_store(StorageScope::Durable),
        scoped_store(StorageScope::Tab),
    )
}

#[cfg(target_arch = "wasm32")]
fn scoped_store(scope: StorageScope) -> Rc<dyn SessionStore> {
    Rc::new(BrowserStorage::new(scope))
}

#[cfg(not(target_arch = "wasm32"))]
fn scoped_store(scope: StorageScope) -> Rc<dyn SessionStore> {
    use shared_types::MemoryStore;

    thread_local! {
        static DURABLE: Rc<MemoryStore> = Rc::new(MemoryStore::new());
        static TAB: Rc<MemoryStore> = Rc::new(MemoryStore::new());
    }

    match scope {
        StorageScope::Durable => DURABLE.with(|store| store.clone() as Rc<dyn SessionStore>),
        StorageScope::Tab => TAB.with(|store| store.clone() as Rc<dyn SessionStore>),
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use shared_types::{AppError, SessionStore, StorageScope};

    /// `localStorage` or `sessionStorage`, looked up on every access.
    #[derive(Debug, Clone, Copy)]
    pub struct BrowserStorage {
        scope: StorageScope,
    }

    impl BrowserStorage {
        pub fn new(scope: StorageScope) -> Self {
            Self { scope }
        }

        fn storage(&self) -> Result<web_sys::Storage, AppError> {
            let window =
                web_sys::window().ok_or_else(|| AppError::storage("Browser window unavailable"))?;
            let storage = match self.scope {
                StorageScope::Durable => window.local_storage(),
                StorageScope::Tab => window.session_storage(),
            };
            storage
                .ok()
                .flatten()
                .ok_or_else(|| AppError::storage("Browser storage is unavailable"))
        }
    }

    impl SessionStore for BrowserStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            self.storage().ok()?.get_item(key).ok().flatten()
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
            self.storage()?.set_item(key, value).map_err(|_| {
                tracing::error!(scope = ?self.scope, key = key, "Browser refused storage write");
                AppError::storage("Could not save your session in this browser")
            })
        }

        fn clear(&self) -> Result<(), AppError> {
            self.storage()?.clear().map_err(|_| {
                tracing::error!(scope = ?self.scope, "Browser refused to clear storage");
                AppError::storage("Could not clear your session in this browser")
            })
        }
    }
}
