use crate::controllers::interactive::errors::config::SessionConfigError;
use crate::core::data::grid::GridDims;
use crate::core::fractals::mandelbrot::params::EvalParams;
use std::time::Duration;

const DEFAULT_ROWS: u32 = 40;
const DEFAULT_COLS: u32 = 120;
const DEFAULT_ZOOM_DURATION: Duration = Duration::from_secs(1);
// 24 frames per second
const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 24);

/// Session parameters, immutable once a session is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub grid: GridDims,
    pub eval: EvalParams,
    pub zoom_duration: Duration,
    pub frame_interval: Duration,
    /// Classify cells on rayon's pool; the sink is still driven from the caller.
    pub parallel: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid: GridDims::new(DEFAULT_ROWS, DEFAULT_COLS)
                .expect("default grid dimensions are valid"),
            eval: EvalParams::default(),
            zoom_duration: DEFAULT_ZOOM_DURATION,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            parallel: true,
        }
    }
}

impl SessionConfig {
    pub fn new(
        rows: u32,
        cols: u32,
        bailout: f64,
        max_iterations: u32,
        zoom_duration: Duration,
    ) -> Result<Self, SessionConfigError> {
        let config = Self {
            grid: GridDims::new(rows, cols)?,
            eval: EvalParams::new(bailout, max_iterations)?,
            zoom_duration,
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SessionConfigError> {
        if self.zoom_duration.is_zero() {
            return Err(SessionConfigError::ZeroZoomDuration);
        }

        if self.frame_interval.is_zero() {
            return Err(SessionConfigError::ZeroFrameInterval);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid::GridDimsError;
    use crate::core::fractals::mandelbrot::errors::EvalParamsError;

    #[test]
    fn default_config_is_valid() {
        let config = SessionConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.grid.rows(), 40);
        assert_eq!(config.grid.cols(), 120);
        assert_eq!(config.eval.bailout(), 16.0);
        assert_eq!(config.eval.max_iterations(), 5000);
        assert_eq!(config.frame_interval.as_millis(), 41);
    }

    #[test]
    fn new_rejects_each_invalid_parameter() {
        let second = Duration::from_secs(1);

        assert_eq!(
            SessionConfig::new(0, 10, 2.0, 10, second),
            Err(SessionConfigError::Grid(GridDimsError::InvalidSize { rows: 0, cols: 10 }))
        );
        assert_eq!(
            SessionConfig::new(10, 10, -1.0, 10, second),
            Err(SessionConfigError::Eval(EvalParamsError::InvalidBailout { bailout: -1.0 }))
        );
        assert_eq!(
            SessionConfig::new(10, 10, 2.0, 0, second),
            Err(SessionConfigError::Eval(EvalParamsError::ZeroMaxIterations))
        );
        assert_eq!(
            SessionConfig::new(10, 10, 2.0, 10, Duration::ZERO),
            Err(SessionConfigError::ZeroZoomDuration)
        );
    }

    #[test]
    fn validate_rejects_zero_frame_interval() {
        let config = SessionConfig {
            frame_interval: Duration::ZERO,
            ..SessionConfig::default()
        };

        assert_eq!(config.validate(), Err(SessionConfigError::ZeroFrameInterval));
    }

    #[test]
    fn new_keeps_default_cadence() {
        let config = SessionConfig::new(8, 16, 2.0, 100, Duration::from_millis(250)).unwrap();

        assert_eq!(config.frame_interval, SessionConfig::default().frame_interval);
        assert_eq!(config.zoom_duration, Duration::from_millis(250));
        assert!(config.parallel);
    }
}
