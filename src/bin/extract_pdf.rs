use anyhow::Result;
use clap::Parser;
use pdfscripts::cli::ExtractPdfArgs;
use pdfscripts::commands;

fn main() -> Result<()> {
    env_logger::init();
    let args = ExtractPdfArgs::parse();

    commands::extract::run(&args.input, &args.output, args.start, args.end)?;

    Ok(())
}
