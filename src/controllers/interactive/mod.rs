//! Interactive viewing session.
//!
//! A [`Session`] owns the zoom animation, the render scheduler and a
//! [`CellSink`](ports::CellSink). Hosts feed it clock ticks and clicks; every
//! render drives the sink with one full-grid frame.

pub mod data;
pub mod errors;
pub mod ports;
pub mod render;
mod session;
pub mod zoom;

pub use session::{ClickReport, Session};
