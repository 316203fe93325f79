use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser as ClapParser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cdcl::export::export_file;
use cdcl::{CdclError, OutputFormat, Parser};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Toml => OutputFormat::Toml,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Translate a CDCL configuration file into TOML or JSON.
#[derive(Debug, ClapParser)]
#[command(name = "cdcl", version, about)]
struct Args {
    /// Path to the input file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Toml)]
    format: Format,

    /// Reject unrecognized lines and entries outside of any block
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("CDCL_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "starting");

    let parser = Parser::new().strict(args.strict);
    match export_file(&args.input, &parser, args.format.into()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", report(&e, &args.input));
            ExitCode::from(e.exit_code())
        }
    }
}

fn report(error: &CdclError, input: &Path) -> String {
    match error {
        CdclError::FileError { .. } if error.is_not_found() => {
            format!("Error: File not found - {}", input.display())
        }
        CdclError::SyntaxError { .. } => format!("Syntax Error: {}", error),
        CdclError::UndefinedConstant { .. } => format!("Undefined Constant Error: {}", error),
        other => format!("Error: {}", other),
    }
}
