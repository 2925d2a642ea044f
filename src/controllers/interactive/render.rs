use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::ports::cell_sink::CellSink;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::data::grid::GridDims;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::mandelbrot::params::EvalParams;
use std::time::Instant;

/// Classifies the whole grid, then hands every cell to `sink`.
///
/// Nothing reaches the sink until the full grid has been classified, so a
/// failed pass leaves the sink untouched.
pub fn render_grid<S: CellSink + ?Sized>(
    sink: &mut S,
    grid: GridDims,
    viewport: Viewport,
    params: EvalParams,
    parallel: bool,
) -> Result<(), RenderError> {
    let start = Instant::now();
    let algorithm = EscapeTimeAlgorithm::new(grid, viewport, params);

    let outcomes = if parallel {
        generate_fractal_rayon(grid, &algorithm)?
    } else {
        generate_fractal(grid, &algorithm)?
    };

    for (cell, outcome) in grid.cells().zip(outcomes) {
        match outcome.hue() {
            Some(hue) => sink.mark_outside(cell, hue),
            None => sink.mark_inside(cell),
        }
    }
    sink.frame_complete();

    log::trace!(
        "rendered {}x{} grid in {:?}",
        grid.rows(),
        grid.cols(),
        start.elapsed()
    );

    Ok(())
}
