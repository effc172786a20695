use std::path::PathBuf;

use adorn_env::Loader;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum EnvCommands {
    /// Load an env file and print the stored credentials
    Show {
        /// Environment file to read
        #[arg(long, default_value = ".env")]
        file: PathBuf,

        /// Keep values already present in the process environment
        #[arg(long)]
        no_override: bool,
    },

    /// Pick DEV or PROD credentials based on the detected platform
    Select {
        /// Environment file to read
        #[arg(long, default_value = ".env")]
        file: PathBuf,

        /// Force an environment instead of detecting the platform
        #[arg(short, long, value_parser = ["DEV", "PROD"])]
        environment: Option<String>,
    },

    /// Choose a database from the DEBUG flag
    Switch {
        /// Environment file to read
        #[arg(long, default_value = ".env")]
        file: PathBuf,
    },
}

impl EnvCommands {
    pub fn execute(self) -> anyhow::Result<()> {
        match self {
            EnvCommands::Show { file, no_override } => show(file, no_override),
            EnvCommands::Select { file, environment } => select(file, environment),
            EnvCommands::Switch { file } => switch(file),
        }
    }
}

/// Missing keys resolve to a printed placeholder, never an error
fn placeholder(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

fn show(file: PathBuf, no_override: bool) -> anyhow::Result<()> {
    let env = Loader::new()
        .path(file)
        .override_existing(!no_override)
        .load_and_apply()?;

    println!("API_KEY = {}", placeholder(env.get("API_KEY")));
    println!("DATABASE_URL = {}", placeholder(env.get("DATABASE_URL")));
    println!("SECRET = {}", placeholder(env.get("SECRET_KEY")));

    Ok(())
}

fn select(file: PathBuf, environment: Option<String>) -> anyhow::Result<()> {
    println!("platform={}", std::env::consts::OS);
    let environment = environment.unwrap_or_else(|| {
        if cfg!(target_os = "linux") {
            "PROD".to_string()
        } else {
            "DEV".to_string()
        }
    });

    let env = Loader::new().path(file).load()?;
    let db_user = env.get(&format!("{environment}_DB_USER"));
    let db_pass = env.get(&format!("{environment}_DB_PASS"));

    println!("USER = {}", placeholder(db_user));
    println!("PASS = {}", placeholder(db_pass));

    Ok(())
}

fn switch(file: PathBuf) -> anyhow::Result<()> {
    let env = Loader::new().path(file).load()?;

    let db = if env.get("DEBUG") == Some("True") {
        "Test Database"
    } else {
        "Production Database"
    };
    println!("{db}");

    Ok(())
}
