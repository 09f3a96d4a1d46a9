use clap::{Parser, Subcommand};
use relstat_core::cli::{self, AnalyzeArgs, ConfigCmd};
use relstat_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "relstat",
    version,
    about = "relstat: rank slow and frequent spatial-relation checks in geometry pipeline logs"
)]
struct Cli {
    /// Force JSON logs on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one or more event logs and print the report
    Analyze(AnalyzeArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.json_logs);

    let result = match cli.command {
        Command::Analyze(args) => cli::run_analyze(args),
        Command::Config { cmd } => cli::conf::run(cmd),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "relstat failed");
        eprintln!("relstat error: {e:#}");
        std::process::exit(1);
    }
}
