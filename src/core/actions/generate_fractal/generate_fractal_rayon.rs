use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid::GridDims;

/// Computes every cell of `grid` on rayon's pool.
///
/// Results come back in the same row-major order as
/// [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(
    grid: GridDims,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    (0..grid.cell_count())
        .into_par_iter()
        .map(|index| algorithm.compute(grid.cell_at(index)))
        .collect()
}
