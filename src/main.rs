use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hwangsae_dbus_codegen::GenerationRequest;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Generate Hwangsae1 D-Bus C bindings with gdbus-codegen", long_about = None)]
struct Cli {
    /// Interface name suffix (e.g. Manager, EdgeInterface)
    suffix: String,

    /// Base name for the generated C source and header
    output_file: String,

    /// Directory the generated code is written to
    output_dir: PathBuf,

    /// Path to the D-Bus interface definition XML
    definition_path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let request = GenerationRequest {
        suffix: cli.suffix,
        output_file: cli.output_file,
        output_dir: cli.output_dir,
        definition_path: cli.definition_path,
    };

    let exit_code = commands::generate::execute(request)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
