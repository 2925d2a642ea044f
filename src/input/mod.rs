//! Input adapters that drive a session from outside the library.

#[cfg(feature = "gui")]
pub mod gui;
