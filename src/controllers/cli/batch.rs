use crate::adapters::permalink::Permalink;
use crate::controllers::interactive::Session;
use crate::controllers::interactive::data::session_config::SessionConfig;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::grid::GridCell;
use crate::core::zoom::restore::RestoreParams;
use crate::presenters::grid::pixel_buffer_sink::PixelBufferSink;
use crate::presenters::terminal::ansi::AnsiGridSink;
use std::path::Path;
use std::time::{Duration, Instant};

// 60 Hz
const SIMULATED_FRAME: Duration = Duration::from_nanos(1_000_000_000 / 60);

type BatchSink = (AnsiGridSink, PixelBufferSink);

/// Drives a session without a window: clicks are replayed against a
/// simulated clock and the settled view is printed and written to disk.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    session: Session<BatchSink>,
    clock: Instant,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(
        presenter: P,
        config: SessionConfig,
        restore: Option<RestoreParams>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let sink = (AnsiGridSink::new(config.grid), PixelBufferSink::new(config.grid));
        let mut session = Session::new(config, restore, sink)?;
        let clock = Instant::now();

        session.mark_ready(clock)?;

        Ok(Self {
            presenter,
            session,
            clock,
        })
    }

    /// Clicks `cell` and ticks until the zoom settles. Returns `false` if the
    /// click was dropped.
    pub fn click(&mut self, cell: GridCell) -> Result<bool, RenderError> {
        if !self.session.click(cell, self.clock)?.accepted {
            return Ok(false);
        }

        let mut frames = 0;
        while self.session.is_zooming() {
            self.clock += SIMULATED_FRAME;
            self.session.tick(self.clock)?;
            frames += 1;
        }

        log::debug!("zoom towards {:?} settled after {} ticks", cell, frames);
        Ok(true)
    }

    #[must_use]
    pub fn ansi(&self) -> String {
        self.session.sink().0.render()
    }

    #[must_use]
    pub fn permalink(&self) -> Permalink {
        self.session.permalink()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        self.presenter.present(self.session.sink().1.buffer(), filepath)
    }
}
