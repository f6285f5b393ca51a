//! Portal UI building blocks. Each component ships its own `style.css`,
//! linked the first time the component renders.

pub mod components;

pub use components::*;
