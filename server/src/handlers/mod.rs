//! Request handlers for flow export.

mod export;

pub use export::*;
