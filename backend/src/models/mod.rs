//! Domain models

pub mod event;

pub use event::{RngEvent, RngEventLog};
