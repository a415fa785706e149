use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmds;

#[derive(Parser)]
#[command(name = "sol-gen")]
#[command(about = "Solidity helper generators - array builders and sorted JSON struct mirrors")]
#[command(version)]
struct Cli {
    /// Generator configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the array-builder library
    Solarray {
        /// Exclusive upper bound on builder arity
        #[arg(long = "max-arity", value_name = "N")]
        max_arity: Option<usize>,

        /// Type to generate builders for (repeatable, replaces the configured list)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Name of the generated library
        #[arg(long = "library", value_name = "NAME")]
        library: Option<String>,

        /// Write the library to this file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate alphabetically sorted JSON mirrors of the structs in a Solidity file
    StructSort {
        /// Solidity file containing struct definitions
        file: PathBuf,

        /// Output directory for the generated files
        #[arg(short = 'o', long = "output", value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Rewrite references to structs defined later in the file
        #[arg(long = "resolve-forward-refs")]
        resolve_forward_refs: bool,

        /// Fail on members that cannot be mirrored instead of skipping them
        #[arg(long = "strict")]
        strict: bool,

        /// Import path of the original struct definitions
        #[arg(long = "original-path", value_name = "PATH")]
        original_path: Option<String>,
    },

    /// Show the structs, fields and type rewrites found in a Solidity file
    Inspect {
        /// Solidity file containing struct definitions
        file: PathBuf,

        /// Rewrite references to structs defined later in the file
        #[arg(long = "resolve-forward-refs")]
        resolve_forward_refs: bool,

        /// Print the report as JSON
        #[arg(long = "json")]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr)) // stdout carries generated code
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cmds::common::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Solarray {
            max_arity,
            types,
            library,
            output,
        } => {
            let overrides = cmds::solarray::Overrides {
                max_arity,
                types,
                library,
            };
            cmds::solarray::run(config, overrides, output, cli.verbose)?;
        }

        Commands::StructSort {
            file,
            output_dir,
            resolve_forward_refs,
            strict,
            original_path,
        } => {
            let overrides = cmds::struct_sort::Overrides {
                resolve_forward_refs,
                strict,
                original_path,
            };
            cmds::struct_sort::run(config, overrides, file, output_dir, cli.verbose)?;
        }

        Commands::Inspect {
            file,
            resolve_forward_refs,
            json,
        } => {
            cmds::inspect::run(config, file, resolve_forward_refs, json)?;
        }
    }

    Ok(())
}
