use clap::Subcommand;

pub mod dice;
pub mod env;
pub mod functions;
pub mod greet;
pub mod measure;
pub mod wrap;

use self::env::EnvCommands;

#[derive(Subcommand)]
pub enum Commands {
    /// Prefix greeters built from captured closure state
    Greet,

    /// First-class functions stored and called like any other value
    Functions,

    /// Before/After wrapping with full argument forwarding
    Wrap,

    /// Roll a die three times through a repeating wrapper
    Dice,

    /// Time and memory reports for two list-building strategies
    Measure,

    /// Environment-file loading
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },
}

impl Commands {
    pub fn execute(self) -> eyre::Result<()> {
        match self {
            Commands::Greet => greet::execute(),
            Commands::Functions => functions::execute(),
            Commands::Wrap => wrap::execute(),
            Commands::Dice => dice::execute(),
            Commands::Measure => measure::execute(),
            Commands::Env { command } => command.execute().map_err(|err| eyre::eyre!(err)),
        }
    }
}
