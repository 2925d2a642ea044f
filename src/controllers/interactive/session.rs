use crate::adapters::permalink::Permalink;
use crate::controllers::interactive::data::session_config::SessionConfig;
use crate::controllers::interactive::errors::config::SessionConfigError;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::ports::cell_sink::CellSink;
use crate::controllers::interactive::render::render_grid;
use crate::controllers::interactive::zoom::scheduler::{
    RenderScheduler, SchedulerAction, TickReport,
};
use crate::core::data::grid::GridCell;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::animator::ZoomAnimator;
use crate::core::zoom::level::ZoomLevel;
use crate::core::zoom::restore::{RestoreParams, initial_view};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickReport {
    /// A new zoom was installed.
    pub accepted: bool,
    /// The view a finished zoom settled on before this click was handled.
    pub settled: Option<Permalink>,
}

/// One interactive viewing session over a fixed grid.
///
/// The host owns the frame loop: it calls [`Session::tick`] on every frame,
/// [`Session::click`] on user input, and [`Session::mark_ready`] once the
/// rendering resources exist. All three are expected on the same thread.
pub struct Session<S: CellSink> {
    config: SessionConfig,
    animator: ZoomAnimator,
    scheduler: RenderScheduler,
    sink: S,
}

impl<S: CellSink> Session<S> {
    pub fn new(
        config: SessionConfig,
        restore: Option<RestoreParams>,
        sink: S,
    ) -> Result<Self, SessionConfigError> {
        config.validate()?;

        let (viewport, zoom_level) = initial_view(restore);
        log::info!(
            "session {}x{} starting at zoom {} around {:?}",
            config.grid.rows(),
            config.grid.cols(),
            zoom_level,
            viewport.center()
        );

        Ok(Self {
            animator: ZoomAnimator::new(config.grid, config.zoom_duration, viewport, zoom_level),
            scheduler: RenderScheduler::new(config.frame_interval),
            config,
            sink,
        })
    }

    pub fn mark_ready(&mut self, now: Instant) -> Result<SchedulerAction, RenderError> {
        let Self {
            config,
            animator,
            scheduler,
            sink,
        } = self;

        scheduler.mark_ready(now, animator, |viewport| {
            render_grid(sink, config.grid, viewport, config.eval, config.parallel)
        })
    }

    pub fn tick(&mut self, now: Instant) -> Result<TickReport, RenderError> {
        let Self {
            config,
            animator,
            scheduler,
            sink,
        } = self;

        scheduler.tick(now, animator, |viewport| {
            render_grid(sink, config.grid, viewport, config.eval, config.parallel)
        })
    }

    /// Starts a zoom towards `cell`.
    ///
    /// A zoom whose duration has run out is retired first with a regular
    /// tick, so its final frame is rendered and its view reported before the
    /// next one starts. The click is dropped while an animation is still
    /// running or when `cell` is off the grid.
    pub fn click(&mut self, cell: GridCell, now: Instant) -> Result<ClickReport, RenderError> {
        let mut settled = None;

        if self.animator.is_expired(now) && self.tick(now)?.settled {
            settled = Some(self.permalink());
        }

        Ok(ClickReport {
            accepted: self.animator.start_zoom(cell, now),
            settled,
        })
    }

    /// The idle viewport, or the target of the running zoom.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.animator.resting_viewport()
    }

    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.animator.zoom_level()
    }

    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.animator.is_zooming()
    }

    #[must_use]
    pub fn permalink(&self) -> Permalink {
        Permalink::new(self.viewport().center(), self.zoom_level())
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
