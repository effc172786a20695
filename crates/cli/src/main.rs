use adorn_wrap::TrackingAllocator;
use clap::Parser;

mod commands;
mod logging;

use commands::Commands;

// Heap figures for the `measure` demo are counted through the binary's
// allocator; tracking is inert outside a measurement session.
#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

#[derive(Parser)]
#[command(name = "adorn")]
#[command(about = "Callable wrapping and env-file loading demonstrations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    logging::init()?;

    let cli = Cli::parse();
    cli.command.execute()
}
