use crate::error::{Error, Result};
use crate::pdf::text::{extract_text_pages, PageText};
use crate::pdf::{DocumentInfo, PdfDocument};
use std::path::Path;

const RULE_WIDTH: usize = 50;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, detailed: bool) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    println!("Processing: {}", input.display());
    if detailed {
        println!("Mode: Detailed extraction (with metadata)");
    } else {
        println!("Mode: Simple extraction (text only)");
    }

    let content = extract_report(input, detailed)?;

    std::fs::write(output, content).map_err(|source| Error::Io {
        path: output.display().to_string(),
        source,
    })?;

    println!("Successfully saved to: {}", output.display());

    Ok(())
}

/// Build the text report for `input` without writing it anywhere.
pub fn extract_report<P: AsRef<Path>>(input: P, detailed: bool) -> Result<String> {
    let doc = PdfDocument::open(&input)?;
    let pages = extract_text_pages(&doc)?;

    if detailed {
        Ok(render_detailed(doc.info().as_ref(), doc.page_count(), &pages))
    } else {
        Ok(render_pages(&pages))
    }
}

/// Each page's text under a `--- Page N ---` header. Page text is copied
/// verbatim, so no newline is added after it.
pub fn render_pages(pages: &[PageText]) -> String {
    let mut out = String::new();
    for page in pages {
        out.push_str(&format!("--- Page {} ---\n", page.page));
        out.push_str(&page.text);
    }
    out
}

pub fn render_detailed(info: Option<&DocumentInfo>, page_count: u32, pages: &[PageText]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push_str("\nPDF INFORMATION\n");
    out.push_str(&rule);
    out.push_str("\n\n");

    match info {
        Some(info) => {
            let fields = [
                ("Title", &info.title),
                ("Author", &info.author),
                ("Subject", &info.subject),
                ("Creator", &info.creator),
                ("Producer", &info.producer),
                ("Creation Date", &info.creation_date),
            ];
            for (label, value) in fields {
                out.push_str(&format!("{}: {}\n", label, value.as_deref().unwrap_or("N/A")));
            }
        }
        None => out.push_str("No metadata available\n"),
    }

    out.push_str(&format!("\nTotal Pages: {}\n", page_count));
    out.push('\n');
    out.push_str(&rule);
    out.push_str("\nCONTENT\n");
    out.push_str(&rule);
    out.push('\n');

    out.push_str(&render_pages(pages));
    out
}
