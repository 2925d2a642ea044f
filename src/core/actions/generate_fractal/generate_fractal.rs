use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid::GridDims;

/// Computes every cell of `grid` in row-major order on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    grid: GridDims,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    grid.cells().map(|cell| algorithm.compute(cell)).collect()
}
