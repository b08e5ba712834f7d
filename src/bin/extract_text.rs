use anyhow::Result;
use clap::Parser;
use pdfscripts::cli::ExtractTextArgs;
use pdfscripts::commands;

fn main() -> Result<()> {
    env_logger::init();
    let args = ExtractTextArgs::parse();

    commands::text::run(&args.input_pdf, &args.output_txt, args.detailed)?;

    Ok(())
}
