//! Envkube CLI - convert .env files into Kubernetes configuration artifacts

use clap::{Parser, Subcommand};
use miette::Result;
use std::path::PathBuf;

mod commands;
mod error;
mod exit_codes;

use commands::convert::Artifact;
use error::CliError;

#[derive(Parser)]
#[command(name = "envkube")]
#[command(author = "Envkube Contributors")]
#[command(version)]
#[command(about = "Convert .env files into ConfigMap, ExternalSecret and Vault artifacts", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a .env file into all three artifacts
    Convert {
        /// Path to the .env file
        env_file: PathBuf,

        /// Application name, used to derive artifact names
        #[arg(short, long, default_value = "app")]
        app_name: String,

        /// Target namespace
        #[arg(short, long, default_value = "default")]
        namespace: String,

        /// Vault path shared by every secret entry
        #[arg(long, default_value = "app/secrets")]
        vault_path: String,

        /// Treat this key as a secret, overriding the heuristic (repeatable)
        #[arg(long = "secret")]
        secret: Vec<String>,

        /// Treat this key as plain configuration (repeatable)
        #[arg(long = "plain")]
        plain: Vec<String>,

        /// Write artifacts to this directory instead of stdout
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Render only one artifact
        #[arg(short = 's', long, value_enum)]
        show_only: Option<Artifact>,
    },

    /// Show how a .env file parses and classifies
    Inspect {
        /// Path to the .env file
        env_file: PathBuf,

        /// Treat this key as a secret, overriding the heuristic (repeatable)
        #[arg(long = "secret")]
        secret: Vec<String>,

        /// Treat this key as plain configuration (repeatable)
        #[arg(long = "plain")]
        plain: Vec<String>,

        /// Output entries as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();

    // Set debug level
    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    if let Err(report) = dispatch(cli) {
        let code = report
            .downcast_ref::<CliError>()
            .map(CliError::exit_code)
            .unwrap_or(exit_codes::ERROR);
        eprintln!("{:?}", report);
        std::process::exit(code);
    }

    Ok(())
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            env_file,
            app_name,
            namespace,
            vault_path,
            secret,
            plain,
            output_dir,
            show_only,
        } => commands::convert::run(
            &env_file,
            &app_name,
            &namespace,
            &vault_path,
            &secret,
            &plain,
            output_dir.as_deref(),
            show_only,
            cli.debug,
        ),

        Commands::Inspect {
            env_file,
            secret,
            plain,
            json,
        } => commands::inspect::run(&env_file, &secret, &plain, json),
    }
}
