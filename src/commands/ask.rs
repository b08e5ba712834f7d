use crate::error::{Error, Result};
use crate::llm::{ChatClient, Message};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

/// File the model's answer is written to, relative to the working directory.
pub const RESPONSE_FILE: &str = "res.md";

pub struct AskOptions {
    pub prompt: String,
    pub model: String,
    pub host: String,
    pub keep: bool,
}

pub fn run(options: &AskOptions) -> Result<()> {
    let client = ChatClient::new(&options.host)?;
    let messages = [Message::user(options.prompt.as_str())];

    let spinner = start_spinner();
    let response = client.chat(&options.model, &messages);
    spinner.finish_and_clear();
    let response = response?;

    let path = Path::new(RESPONSE_FILE);
    std::fs::write(path, &response).map_err(|source| io_error(path, source))?;

    println!();
    display(path)?;

    if let Some(message) = finish_response(path, options.keep)? {
        println!("\n{}", message);
    }

    Ok(())
}

/// Keep or delete the displayed response file, returning the notice to print
/// when it is kept.
fn finish_response(path: &Path, keep: bool) -> Result<Option<String>> {
    if keep {
        return Ok(Some(format!("Output saved as {}", path.display())));
    }
    std::fs::remove_file(path).map_err(|source| io_error(path, source))?;
    Ok(None)
}

fn start_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    // The last tick string is shown once finished; it is cleared anyway.
    let style = ProgressStyle::with_template(" {msg}{spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["|", "/", "-", "\\", ""]);
    spinner.set_style(style);
    spinner.set_message("Generating...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Show a markdown file with `batcat`, falling back to `cat` when bat is not
/// installed.
pub fn display(path: &Path) -> Result<()> {
    let status = match Command::new("batcat")
        .args(["-l", "markdown", "--paging=never"])
        .arg(path)
        .status()
    {
        Ok(status) => ("batcat", status),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("batcat not found, falling back to cat");
            let status = Command::new("cat")
                .arg(path)
                .status()
                .map_err(|e| Error::Pager(format!("cat: {}", e)))?;
            ("cat", status)
        }
        Err(e) => return Err(Error::Pager(format!("batcat: {}", e))),
    };

    match status {
        (_, status) if status.success() => Ok(()),
        (pager, status) => Err(Error::Pager(format!("{} exited with {}", pager, status))),
    }
}

fn io_error(path: &Path, source: io::Error) -> Error {
    Error::Io {
        path: path.display().to_string(),
        source,
    }
}
