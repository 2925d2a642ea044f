use crate::core::data::grid::{GridCell, GridDims};
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::zoom::homotopy::ViewportHomotopy;
use crate::core::zoom::level::ZoomLevel;
use crate::core::zoom::restore::zoomed_window;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    Idle {
        viewport: Viewport,
    },
    Zooming {
        start_time: Instant,
        start: Viewport,
        target: Viewport,
    },
}

impl AnimationState {
    #[must_use]
    pub fn homotopy(&self) -> ViewportHomotopy {
        match *self {
            Self::Idle { viewport } => ViewportHomotopy::constant(viewport),
            Self::Zooming { start, target, .. } => ViewportHomotopy::linear(start, target),
        }
    }

    /// Elapsed fraction of the running animation, unclamped. `None` when idle.
    #[must_use]
    pub fn fraction(&self, now: Instant, zoom_duration: Duration) -> Option<f64> {
        match *self {
            Self::Idle { .. } => None,
            Self::Zooming { start_time, .. } => {
                if zoom_duration.is_zero() {
                    return Some(1.0);
                }
                let elapsed = now.saturating_duration_since(start_time);
                Some(elapsed.as_secs_f64() / zoom_duration.as_secs_f64())
            }
        }
    }

    /// The window this state is at rest on, or heading to.
    #[must_use]
    pub fn resting_viewport(&self) -> Viewport {
        match *self {
            Self::Idle { viewport } => viewport,
            Self::Zooming { target, .. } => target,
        }
    }
}

/// Why a click did not start a zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomRejection {
    /// The previous animation is still inside its duration.
    InProgress,
    OutsideGrid,
    /// The target window would not be finite.
    DegenerateWindow,
}

/// Computes the animation a click at `cell` should start.
///
/// At [`ZoomLevel::MAX`] the click position is ignored and the target is the
/// default window at level zero.
pub fn start_zoom(
    cell: GridCell,
    state: &AnimationState,
    grid: GridDims,
    zoom_duration: Duration,
    zoom_level: ZoomLevel,
    now: Instant,
) -> Result<(AnimationState, ZoomLevel), ZoomRejection> {
    if let AnimationState::Zooming { start_time, .. } = *state {
        if now.saturating_duration_since(start_time) < zoom_duration {
            return Err(ZoomRejection::InProgress);
        }
    }

    let current = state.resting_viewport();
    let clicked = pixel_to_complex_coords(cell, grid, current)
        .map_err(|_| ZoomRejection::OutsideGrid)?;
    let next_level = zoom_level.next();

    let target = if zoom_level.is_max() {
        Viewport::default()
    } else {
        zoomed_window(clicked, next_level).ok_or(ZoomRejection::DegenerateWindow)?
    };

    Ok((
        AnimationState::Zooming {
            start_time: now,
            start: current,
            target,
        },
        next_level,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub viewport: Viewport,
    pub zooming: bool,
    /// Set on the frame that finishes an animation.
    pub settled: bool,
}

pub struct ZoomAnimator {
    grid: GridDims,
    zoom_duration: Duration,
    state: AnimationState,
    zoom_level: ZoomLevel,
}

impl ZoomAnimator {
    #[must_use]
    pub fn new(
        grid: GridDims,
        zoom_duration: Duration,
        viewport: Viewport,
        zoom_level: ZoomLevel,
    ) -> Self {
        Self {
            grid,
            zoom_duration,
            state: AnimationState::Idle { viewport },
            zoom_level,
        }
    }

    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom_level
    }

    #[must_use]
    pub fn is_zooming(&self) -> bool {
        matches!(self.state, AnimationState::Zooming { .. })
    }

    /// True once the running animation has used up its duration but has
    /// not yet been retired by [`ZoomAnimator::advance`].
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.state
            .fraction(now, self.zoom_duration)
            .is_some_and(|t| t >= 1.0)
    }

    /// The idle viewport, or the target of the running animation.
    #[must_use]
    pub fn resting_viewport(&self) -> Viewport {
        self.state.resting_viewport()
    }

    /// Installs a new animation for a click at `cell`. Returns `false` when
    /// the click was dropped.
    pub fn start_zoom(&mut self, cell: GridCell, now: Instant) -> bool {
        match start_zoom(
            cell,
            &self.state,
            self.grid,
            self.zoom_duration,
            self.zoom_level,
            now,
        ) {
            Ok((state, zoom_level)) => {
                log::info!(
                    "zoom {} -> {} towards {:?}",
                    self.zoom_level,
                    zoom_level,
                    state.resting_viewport().center()
                );
                self.state = state;
                self.zoom_level = zoom_level;
                true
            }
            Err(ZoomRejection::InProgress) => {
                log::debug!("zoom in progress, ignoring click at {:?}", cell);
                false
            }
            Err(ZoomRejection::OutsideGrid) => {
                log::debug!(
                    "click at {:?} is outside the {}x{} grid",
                    cell,
                    self.grid.rows(),
                    self.grid.cols()
                );
                false
            }
            Err(ZoomRejection::DegenerateWindow) => {
                log::warn!("click at {:?} gives no usable zoom window", cell);
                false
            }
        }
    }

    /// Viewport for `now`, retiring the animation once its fraction reaches one.
    pub fn advance(&mut self, now: Instant) -> AnimationFrame {
        let Some(t) = self.state.fraction(now, self.zoom_duration) else {
            return AnimationFrame {
                viewport: self.state.resting_viewport(),
                zooming: false,
                settled: false,
            };
        };

        if t >= 1.0 {
            let viewport = self.state.resting_viewport();
            self.state = AnimationState::Idle { viewport };
            log::info!("zoom settled at level {}", self.zoom_level);

            return AnimationFrame {
                viewport,
                zooming: false,
                settled: true,
            };
        }

        AnimationFrame {
            viewport: self.state.homotopy().at(t),
            zooming: true,
            settled: false,
        }
    }
}
