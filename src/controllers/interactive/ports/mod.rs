//! Port definitions for the interactive controller.
//!
//! Contains the trait a host renderer implements to receive cell
//! classifications from a session.

pub mod cell_sink;

pub use cell_sink::CellSink;
