use crate::controllers::interactive::Session;
use crate::controllers::interactive::data::session_config::SessionConfig;
use crate::core::zoom::restore::RestoreParams;
use crate::input::gui::app::gui_app::{GuiApp, WINDOW_TITLE};
use crate::presenters::grid::pixel_buffer_sink::PixelBufferSink;
use crate::presenters::pixels::presenter::PixelsPresenter;
use std::error::Error;
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

const CELL_PIXELS: u32 = 8;

pub struct RunGuiCommand {
    config: SessionConfig,
    restore: Option<RestoreParams>,
}

impl RunGuiCommand {
    pub fn new(config: SessionConfig, restore: Option<RestoreParams>) -> Self {
        Self { config, restore }
    }

    pub fn execute(self) -> Result<(), Box<dyn Error>> {
        let grid = self.config.grid;
        let mut session = Session::new(self.config, self.restore, PixelBufferSink::new(grid))?;

        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(
                    grid.cols() * CELL_PIXELS,
                    grid.rows() * CELL_PIXELS,
                ))
                .with_min_inner_size(LogicalSize::new(grid.cols(), grid.rows()))
                .build(&event_loop)?,
        ));

        // nothing can be drawn yet; the first frame stays pending
        session.tick(Instant::now())?;

        let presenter = PixelsPresenter::new(window, grid)?;
        let mut app = GuiApp::new(window, presenter, session);
        app.start(Instant::now())?;

        app.run(event_loop)
    }
}
