pub mod file;
pub mod grid;
#[cfg(feature = "gui")]
pub mod pixels;
pub mod terminal;
