pub mod api;
pub mod config;
pub mod directory;
pub mod storage;

pub use api::LibraryApi;
pub use config::portal_config;
pub use directory::BuiltinDirectory;
pub use storage::session_vault;
