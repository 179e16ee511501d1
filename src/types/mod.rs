//! Data types for the windowing engine.

mod config;
mod scroll;
mod window;

pub use config::*;
pub use scroll::*;
pub use window::*;
