//! Click-to-zoom animation: zoom levels, viewport homotopies, and the
//! animator that interpolates between resting views.

pub mod animator;
pub mod homotopy;
pub mod level;
pub mod restore;
