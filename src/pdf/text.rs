use crate::error::Result;
use crate::pdf::PdfDocument;
use pdf_extract::PlainTextOutput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page: u32,
    pub text: String,
}

/// Extract the text of every page, in page order.
///
/// A page that fails to render fails the whole extraction instead of
/// truncating the result.
pub fn extract_text_pages(doc: &PdfDocument) -> Result<Vec<PageText>> {
    let total = doc.page_count();
    let mut results = Vec::with_capacity(total as usize);

    for page in 1..=total {
        let mut text = String::new();
        {
            let mut output = PlainTextOutput::new(&mut text);
            pdf_extract::output_doc_page(&doc.doc, &mut output, page)?;
        }
        results.push(PageText { page, text });
    }

    log::debug!("extracted text from {} page(s) of {}", total, doc.path);
    Ok(results)
}
