//! AccelPanel - per-mode option layouts for mouse acceleration curves
//!
//! This application shows which curve parameters each acceleration mode
//! exposes and assembles engine arguments from field values.

use accelpanel::cli::{CliResult, ConfigArgs, ExitCode, FinalizeArgs, LayoutArgs, ModesArgs};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AccelPanel - option layouts for mouse acceleration modes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List acceleration modes
    Modes(ModesArgs),
    /// Show or check mode layouts
    Layout(LayoutArgs),
    /// Print engine arguments for a mode and field values
    Args(FinalizeArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Modes(args) => args.execute(),
            Self::Layout(args) => args.execute(),
            Self::Args(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command.execute() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code
        }
    };

    std::process::exit(code.code());
}
