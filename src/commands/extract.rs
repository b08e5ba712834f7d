use crate::error::Result;
use crate::page_range::PageRange;
use crate::pdf::PdfDocument;
use std::path::Path;

/// Copy pages `start..=end` (1-based, inclusive) of `input` into a new PDF at
/// `output` and return how many pages were written.
///
/// Nothing is written unless the range is valid for the source document.
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    start: i64,
    end: i64,
) -> Result<u32> {
    let doc = PdfDocument::open(&input)?;
    extract_from(&doc, output, start, end)
}

fn extract_from<Q: AsRef<Path>>(doc: &PdfDocument, output: Q, start: i64, end: i64) -> Result<u32> {
    let range = PageRange::new(start, end, doc.page_count())?;
    log::info!(
        "extracting pages {}-{} of {} from {}",
        range.start(),
        range.end(),
        doc.page_count(),
        doc.path
    );

    let mut new_doc = doc.extract_range(&range)?;
    PdfDocument::save(&mut new_doc, &output)?;

    Ok(range.len())
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    start: i64,
    end: i64,
) -> Result<()> {
    let doc = PdfDocument::open(&input)?;
    println!("{}", total_pages_line(doc.page_count()));

    let extracted = extract_from(&doc, &output, start, end)?;

    println!(
        "{}",
        summary_lines(extracted, input.as_ref(), output.as_ref())
    );

    Ok(())
}

fn total_pages_line(total: u32) -> String {
    format!("Total pages in PDF: {}", total)
}

fn summary_lines(extracted: u32, input: &Path, output: &Path) -> String {
    format!(
        "Successfully extracted {} page(s) from {}\nOutput saved to: {}",
        extracted,
        input.display(),
        output.display()
    )
}
