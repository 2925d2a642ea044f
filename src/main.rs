use clap::Parser;
use env_logger::{Builder, Env};
use mandelgrid::{CliArgs, CliController, PpmFilePresenter, SessionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let restore = args.restore().map(|permalink| permalink.to_restore_params());
    let presenter = PpmFilePresenter::new(args.cell_size);

    let mut controller = CliController::new(presenter, SessionConfig::default(), restore)?;

    for &cell in &args.clicks {
        if !controller.click(cell)? {
            log::warn!("click at row {} col {} ignored", cell.row, cell.col);
        }
    }

    print!("{}", controller.ansi());
    controller.write(&args.output)?;
    println!("?{}", controller.permalink());

    Ok(())
}
