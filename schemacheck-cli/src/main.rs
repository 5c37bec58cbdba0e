use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Report, Result};

use schemacheck::run;

const DEFAULT_SCHEMA_FILE: &str = "payload-schema.json";
const DEFAULT_PAYLOAD_FILE: &str = "payload_example.json";

#[derive(Debug, Parser)]
#[command(
    name = "schemacheck",
    version,
    about = "Validate a JSON payload against a JSON Schema"
)]
struct Cli {
    /// Schema file, resolved against the working directory
    #[arg(
        short = 's',
        long = "schema",
        value_name = "PATH",
        default_value = DEFAULT_SCHEMA_FILE
    )]
    schema: PathBuf,

    /// Payload file, resolved against the working directory
    #[arg(
        short = 'p',
        long = "payload",
        value_name = "PATH",
        default_value = DEFAULT_PAYLOAD_FILE
    )]
    payload: PathBuf,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let status = run(&cli.schema, &cli.payload).map_err(|err| Report::msg(format!("{err:#}")))?;
    Ok(ExitCode::from(status.exit_code()))
}
