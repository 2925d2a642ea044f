pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
pub mod presenters;

pub use adapters::permalink::Permalink;
pub use controllers::cli::args::CliArgs;
pub use controllers::cli::batch::CliController;
pub use controllers::interactive::{ClickReport, Session};
pub use controllers::interactive::data::session_config::SessionConfig;
pub use controllers::interactive::ports::CellSink;
pub use crate::core::data::grid::{GridCell, GridDims};
pub use crate::core::data::viewport::Viewport;
#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
pub use presenters::file::ppm::PpmFilePresenter;
