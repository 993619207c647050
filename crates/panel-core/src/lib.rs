pub mod bindings;
pub mod config;
pub mod constants;
pub mod controller;
pub mod dom;
pub mod error;
pub mod memory;

pub use bindings::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use dom::*;
pub use error::*;
pub use memory::*;
