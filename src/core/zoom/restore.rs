use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::level::ZoomLevel;

/// A plane center and zoom depth to reopen a session at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoreParams {
    pub center: Complex,
    pub zoom_level: ZoomLevel,
}

/// Window of the default size scaled to `zoom_level`, centered on `center`.
pub fn zoomed_window(center: Complex, zoom_level: ZoomLevel) -> Option<Viewport> {
    let home = Viewport::default();
    let scale = zoom_level.scale();

    Viewport::centered(center, home.width() * scale, home.height() * scale).ok()
}

/// Starting viewport and zoom level; anything unusable falls back to the
/// default window at level zero.
#[must_use]
pub fn initial_view(restore: Option<RestoreParams>) -> (Viewport, ZoomLevel) {
    let Some(params) = restore else {
        return (Viewport::default(), ZoomLevel::default());
    };

    match zoomed_window(params.center, params.zoom_level) {
        Some(viewport) if params.center.is_finite() => (viewport, params.zoom_level),
        _ => {
            log::debug!(
                "restore parameters {:?} do not describe a usable window, using default view",
                params
            );
            (Viewport::default(), ZoomLevel::default())
        }
    }
}
