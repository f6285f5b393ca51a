pub mod error;

// Portal view models and their client-side logic
pub mod borrowing;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod requests;
pub mod session;

pub use error::*;

pub use borrowing::*;
pub use catalog::*;
pub use config::*;
pub use directory::*;
pub use requests::*;
pub use session::*;
