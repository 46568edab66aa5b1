use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use pux2xlsx::{Console, ConvertConfig};

/// Convert a 1Password 1PUX export to an Excel spreadsheet
#[derive(Parser)]
#[command(name = "pux2xlsx", version, about)]
struct Cli {
    /// 1Password 1PUX export archive
    #[arg(value_name = "1PUX-ARCHIVE")]
    archive: Option<PathBuf>,

    /// The output file name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress informational messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(archive) = cli.archive else {
        let mut command = Cli::command();
        let _ = command.print_help();
        return ExitCode::FAILURE;
    };

    let config = ConvertConfig::new(archive, cli.output, cli.quiet);
    let console = Console::new(config.quiet);

    match pux2xlsx::run(&config, &console) {
        Ok(report) => {
            console.info(&format!(
                "Wrote {} rows across {} sheets to {}",
                report.rows,
                report.sheets,
                config.output_path.display()
            ));
            ExitCode::SUCCESS
        }
        Err(err) => {
            console.error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
