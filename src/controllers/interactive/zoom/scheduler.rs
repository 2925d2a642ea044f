use crate::core::data::viewport::Viewport;
use crate::core::zoom::animator::ZoomAnimator;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Readiness {
    Uninitialized,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    Rendered,
    /// A render was due but the engine is not ready; it stays pending.
    Deferred,
    NothingToDo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub action: SchedulerAction,
    pub viewport: Viewport,
    /// The tick that retired a zoom animation.
    pub settled: bool,
}

/// Decides, tick by tick, whether the grid must be re-rendered.
///
/// While zooming, renders are paced to at most one per `frame_interval`.
/// Outside an animation only explicit requests render: the first frame, and
/// the final frame of each zoom.
pub struct RenderScheduler {
    frame_interval: Duration,
    last_refresh: Option<Instant>,
    needs_immediate_render: bool,
    readiness: Readiness,
}

impl RenderScheduler {
    /// Starts uninitialised with the first frame already pending.
    #[must_use]
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            last_refresh: None,
            needs_immediate_render: true,
            readiness: Readiness::Uninitialized,
        }
    }

    /// Moves to `Ready` and runs the pending render, if any. Later calls are
    /// no-ops.
    pub fn mark_ready<E>(
        &mut self,
        now: Instant,
        animator: &mut ZoomAnimator,
        render: impl FnOnce(Viewport) -> Result<(), E>,
    ) -> Result<SchedulerAction, E> {
        if self.readiness == Readiness::Ready {
            return Ok(SchedulerAction::NothingToDo);
        }

        self.readiness = Readiness::Ready;
        log::info!("render engine ready");

        if !self.needs_immediate_render {
            return Ok(SchedulerAction::NothingToDo);
        }

        Ok(self.tick(now, animator, render)?.action)
    }

    pub fn tick<E>(
        &mut self,
        now: Instant,
        animator: &mut ZoomAnimator,
        render: impl FnOnce(Viewport) -> Result<(), E>,
    ) -> Result<TickReport, E> {
        let frame = animator.advance(now);

        if frame.settled {
            self.needs_immediate_render = true;
        }

        let mut report = TickReport {
            action: SchedulerAction::NothingToDo,
            viewport: frame.viewport,
            settled: frame.settled,
        };

        if !(self.needs_immediate_render || (frame.zooming && self.cadence_elapsed(now))) {
            return Ok(report);
        }

        if self.readiness == Readiness::Uninitialized {
            self.needs_immediate_render = true;
            report.action = SchedulerAction::Deferred;
            return Ok(report);
        }

        render(frame.viewport)?;

        self.last_refresh = Some(now);
        self.needs_immediate_render = false;
        report.action = SchedulerAction::Rendered;

        Ok(report)
    }

    fn cadence_elapsed(&self, now: Instant) -> bool {
        self.last_refresh
            .is_none_or(|last| now >= last + self.frame_interval)
    }
}
