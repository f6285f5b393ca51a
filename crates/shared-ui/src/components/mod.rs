// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod page_header;
pub mod skeleton;

// Primitive wrappers
pub mod label;
pub mod separator;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use separator::*;
pub use skeleton::*;
