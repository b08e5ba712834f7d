//! Small PDF and local-LLM command-line utilities.
//!
//! Each binary in `src/bin` is a thin wrapper around one of the
//! [`commands`]:
//!
//! - `extract-pdf` copies a page range into a new PDF ([`commands::extract`])
//! - `extract-text` dumps page text, optionally with metadata ([`commands::text`])
//! - `llm` asks an Ollama model a question and displays the answer ([`commands::ask`])

pub mod cli;
pub mod commands;
pub mod error;
pub mod llm;
pub mod page_range;
pub mod pdf;

pub use error::{Error, ErrorKind, RangeError, Result};
pub use page_range::PageRange;
