//! cbx: build and check cron expressions from the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cbx")]
#[command(about = "Cron builder - construct and validate cron expressions")]
#[command(version)]
struct Cli {
    /// Config file (default: $CRONB_CONFIG or the platform config dir)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Use five fields (no year)
    #[arg(long = "five", global = true, conflicts_with = "six")]
    five: bool,

    /// Use six fields (with year)
    #[arg(long = "six", global = true)]
    six: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an expression, applying sets, then adds, then removes
    #[command(visible_alias = "b")]
    Build {
        /// Initial expression (default: all wildcards)
        #[arg(default_value = "")]
        expr: String,

        /// Replace a field's values: FIELD=V1,V2 (empty list resets to *)
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUES")]
        set: Vec<String>,

        /// Add a value to a field: FIELD=VALUE
        #[arg(short = 'a', long = "add", value_name = "FIELD=VALUE")]
        add: Vec<String>,

        /// Remove a value from a field: FIELD=VALUE
        #[arg(short = 'r', long = "remove", value_name = "FIELD=VALUE")]
        remove: Vec<String>,
    },

    /// Check an expression and print "valid"
    #[command(visible_alias = "v")]
    Validate {
        /// Expression to check
        expr: String,
    },

    /// Print one field of an expression
    Get {
        /// Expression to read
        expr: String,

        /// Field name (minute, hour, dayOfMonth, month, dayOfWeek, year)
        field: String,
    },

    /// Print all fields of an expression as JSON
    Dump {
        /// Expression to read
        #[arg(default_value = "")]
        expr: String,
    },

    /// Build from a JSON object of field -> values (reads stdin if no file)
    Load {
        /// JSON file
        file: Option<PathBuf>,
    },

    /// Show the resolved configuration
    Config {
        /// Write the effective configuration to the config path
        #[arg(long = "init")]
        init: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = commands::load_config(cli.config.as_deref(), cli.five, cli.six).and_then(
        |(config, config_path)| match cli.command {
            Commands::Build { expr, set, add, remove } => {
                commands::build(&config, &expr, &set, &add, &remove)
            }
            Commands::Validate { expr } => commands::validate(&config, &expr),
            Commands::Get { expr, field } => commands::get(&config, &expr, &field),
            Commands::Dump { expr } => commands::dump(&config, &expr),
            Commands::Load { file } => commands::load(&config, file.as_deref()),
            Commands::Config { init } => commands::show_config(&config, config_path.as_deref(), init),
        },
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
