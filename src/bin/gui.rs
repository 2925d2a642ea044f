use clap::Parser;
use env_logger::{Builder, Env};
use mandelgrid::{Permalink, RunGuiCommand, SessionConfig};

/// Click anywhere to zoom in; the title bar shows the current view.
#[derive(Parser, Debug)]
#[command(name = "mandelgrid-gui", version)]
struct GuiArgs {
    /// Permalink query to start from (`real=..&imag=..&zoom=..`)
    #[arg(long, value_name = "QUERY")]
    view: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = GuiArgs::parse();
    let restore = args
        .view
        .as_deref()
        .and_then(Permalink::parse)
        .map(Permalink::to_restore_params);

    RunGuiCommand::new(SessionConfig::default(), restore).execute()
}
