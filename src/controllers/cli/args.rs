use crate::adapters::permalink::Permalink;
use crate::core::data::grid::GridCell;
use crate::presenters::file::ppm::DEFAULT_CELL_SIZE;
use clap::Parser;
use std::path::PathBuf;

/// Renders a Mandelbrot grid, replays zoom clicks and writes the settled view.
///
/// Example:
///   mandelgrid --view "real=-0.75&imag=0.125&zoom=2" 20,80 5,40
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mandelgrid", version)]
pub struct CliArgs {
    /// Permalink query to start from (`real=..&imag=..&zoom=..`)
    #[arg(long, value_name = "QUERY")]
    pub view: Option<String>,

    /// Side of the square block each cell becomes in the PPM file
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// PPM output path
    #[arg(long, default_value = "output/mandelgrid.ppm")]
    pub output: PathBuf,

    /// Cells to click, in order, each as ROW,COL
    #[arg(value_name = "ROW,COL", value_parser = parse_cell)]
    pub clicks: Vec<GridCell>,
}

impl CliArgs {
    /// The view to restore. An unparsable query is ignored.
    #[must_use]
    pub fn restore(&self) -> Option<Permalink> {
        let query = self.view.as_deref()?;
        let permalink = Permalink::parse(query);

        if permalink.is_none() {
            log::debug!("ignoring unparsable view '{}'", query);
        }

        permalink
    }
}

fn parse_cell(arg: &str) -> Result<GridCell, String> {
    let invalid = || format!("expected ROW,COL but got '{}'", arg);

    let (row, col) = arg.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;

    Ok(GridCell::new(row, col))
}
