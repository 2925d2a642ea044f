use crate::core::data::grid::GridCell;

/// Receives the classification of every grid cell for each rendered frame.
///
/// Within one render every cell of the grid is marked exactly once before
/// `frame_complete` is called.
pub trait CellSink {
    fn mark_inside(&mut self, cell: GridCell);

    /// `hue_degrees` is always in `[0, 360)`.
    fn mark_outside(&mut self, cell: GridCell, hue_degrees: u32);

    fn frame_complete(&mut self) {}
}

/// Fans every mark out to both sinks, first then second.
impl<A: CellSink, B: CellSink> CellSink for (A, B) {
    fn mark_inside(&mut self, cell: GridCell) {
        self.0.mark_inside(cell);
        self.1.mark_inside(cell);
    }

    fn mark_outside(&mut self, cell: GridCell, hue_degrees: u32) {
        self.0.mark_outside(cell, hue_degrees);
        self.1.mark_outside(cell, hue_degrees);
    }

    fn frame_complete(&mut self) {
        self.0.frame_complete();
        self.1.frame_complete();
    }
}
