use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use munemo::DialectKind;
use munemo::Generator;
use munemo_cli::commands;
use munemo_cli::commands::Command;
use munemo_cli::config::Settings;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogOutputFormat {
    Json,
    Pretty,
}

/// Command line arguments for the munemo tool.
#[derive(Debug, Parser)]
#[clap(name = "munemo", about = "Encode integers as munemo tokens and back")]
struct CliArgs {
    /// Optional path to the configuration file. If not provided, the
    /// defaults are used, overridden by any `MUNEMO_` environment variables.
    #[clap(short = 'c', long, required = false)]
    config: Option<PathBuf>,

    /// The dialect to use, overriding the configured one.
    #[clap(short = 'd', long)]
    dialect: Option<DialectKind>,

    #[clap(short = 'o', long = "output-format", default_value = "pretty")]
    output_format: LogOutputFormat,

    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse the command line arguments.
    let args = CliArgs::parse();

    // Configure the binary's stderr output based on the provided output format.
    let pretty = matches!(args.output_format, LogOutputFormat::Pretty);
    munemo_cli::logging::setup_logging("info,munemo=debug,munemo_cli=debug", pretty);

    // Load the configuration file and/or environment variables.
    let settings = Settings::new(args.config.as_ref())?;
    let dialect = args.dialect.unwrap_or(settings.codec.dialect);
    tracing::debug!(%dialect, "using dialect");

    let generator = Generator::from(dialect);

    let stdout = std::io::stdout();
    if let Err(error) = commands::run(&args.command, &generator, &mut stdout.lock()) {
        tracing::error!(%error, "munemo command failed");
        return Err(error.into());
    }

    Ok(())
}
