use crate::llm::{DEFAULT_HOST, DEFAULT_MODEL};
use clap::Parser;
use std::num::IntErrorKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extract-pdf")]
#[command(about = "Extract specific pages from a PDF file")]
#[command(after_help = "Examples:
  extract-pdf input.pdf output.pdf --start 1 --end 5
  extract-pdf document.pdf extracted.pdf -s 10 -e 20")]
#[command(version)]
pub struct ExtractPdfArgs {
    /// Input PDF file path
    pub input: PathBuf,

    /// Output PDF file path
    pub output: PathBuf,

    /// Start page number (1-indexed)
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_page_number)]
    pub start: i64,

    /// End page number (1-indexed, inclusive)
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_page_number)]
    pub end: i64,
}

/// Parse a page number, clamping integers too large for `i64` so they are
/// reported by range validation instead of rejected as malformed.
fn parse_page_number(s: &str) -> Result<i64, String> {
    match s.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("invalid page number: {}", e)),
        },
    }
}

#[derive(Parser)]
#[command(name = "extract-text")]
#[command(about = "Extract text from PDF files")]
#[command(after_help = "Examples:
  extract-text input.pdf output.txt
  extract-text input.pdf output.txt --detailed")]
#[command(version)]
pub struct ExtractTextArgs {
    /// Input PDF file path
    pub input_pdf: PathBuf,

    /// Output TXT file path
    pub output_txt: PathBuf,

    /// Include PDF metadata and additional information
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Parser)]
#[command(name = "llm")]
#[command(about = "Ask a local LLM (via Ollama) a question and pretty-print the result")]
#[command(after_help = "Examples:
  llm \"<prompt>\"
  llm \"<prompt>\" --model mistral:latest
  llm \"<prompt>\" --keep")]
#[command(version)]
pub struct LlmArgs {
    /// The prompt or question to send to the model
    pub prompt: String,

    /// Model to use
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Keep the generated "res.md" file instead of deleting it after display
    #[arg(long)]
    pub keep: bool,

    /// Ollama server address
    #[arg(long, env = "OLLAMA_HOST", default_value = DEFAULT_HOST)]
    pub host: String,
}
