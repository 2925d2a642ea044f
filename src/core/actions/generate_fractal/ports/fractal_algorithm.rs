use crate::core::data::grid::GridCell;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, cell: GridCell) -> Result<Self::Success, Self::Failure>;
}
