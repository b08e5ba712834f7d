use anyhow::Result;
use clap::Parser;
use pdfscripts::cli::LlmArgs;
use pdfscripts::commands::ask::{self, AskOptions};

fn main() -> Result<()> {
    env_logger::init();
    let args = LlmArgs::parse();

    let options = AskOptions {
        prompt: args.prompt,
        model: args.model,
        host: args.host,
        keep: args.keep,
    };
    ask::run(&options)?;

    Ok(())
}
