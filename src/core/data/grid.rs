use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridDimsError {
    InvalidSize { rows: u32, cols: u32 },
}

impl fmt::Display for GridDimsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { rows, cols } => {
                write!(f, "grid size must be positive: {} rows x {} cols", rows, cols)
            }
        }
    }
}

impl Error for GridDimsError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

impl GridCell {
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridDims {
    rows: u32,
    cols: u32,
}

impl GridDims {
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridDimsError> {
        if rows == 0 || cols == 0 {
            return Err(GridDimsError::InvalidSize { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[must_use]
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major index of `cell`, or `None` when it lies outside the grid.
    #[must_use]
    pub fn index_of(&self, cell: GridCell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }

        Some(cell.row as usize * self.cols as usize + cell.col as usize)
    }

    #[must_use]
    pub fn cell_at(&self, index: usize) -> GridCell {
        let cols = self.cols as usize;

        GridCell {
            row: (index / cols) as u32,
            col: (index % cols) as u32,
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| GridCell { row, col }))
    }
}
