use crate::error::{Error, RangeError, Result};
use crate::page_range::PageRange;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::io;
use std::path::Path;

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = read_pdf_bytes(&path)?;
        Self::from_bytes(&bytes, path)
    }

    /// Parse an already loaded file. `path` is only used for messages.
    pub fn from_bytes<P: AsRef<Path>>(bytes: &[u8], path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let doc = Document::load_mem(bytes).map_err(|source| Error::InvalidDocument {
            path: path_str.clone(),
            source,
        })?;
        log::debug!("loaded {} ({} objects)", path_str, doc.objects.len());
        Ok(PdfDocument {
            doc,
            path: path_str,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Read the document information dictionary.
    ///
    /// Returns `None` when the trailer carries no `/Info` entry at all, which
    /// is distinct from an `/Info` dictionary whose fields are all missing.
    pub fn info(&self) -> Option<DocumentInfo> {
        let dict = match self.doc.trailer.get(b"Info").ok()? {
            Object::Reference(id) => self.doc.get_dictionary(*id).ok()?,
            Object::Dictionary(dict) => dict,
            _ => return None,
        };

        Some(DocumentInfo {
            title: get_string_from_dict(dict, b"Title"),
            author: get_string_from_dict(dict, b"Author"),
            subject: get_string_from_dict(dict, b"Subject"),
            creator: get_string_from_dict(dict, b"Creator"),
            producer: get_string_from_dict(dict, b"Producer"),
            creation_date: get_string_from_dict(dict, b"CreationDate"),
        })
    }

    /// Copy the pages of `range` into a new document, keeping their order.
    ///
    /// The source is cloned and every page outside the range is deleted, so
    /// shared resources stay referenced by the kept pages. Objects left
    /// unreachable afterwards are pruned.
    pub fn extract_range(&self, range: &PageRange) -> Result<Document> {
        let all_pages = self.page_ids();
        let total = all_pages.len() as u32;

        if range.end() > total {
            return Err(RangeError::OutOfBounds {
                start: i64::from(range.start()),
                end: i64::from(range.end()),
                total,
            }
            .into());
        }

        let pages_to_delete: Vec<u32> = all_pages
            .iter()
            .map(|(num, _)| *num)
            .filter(|num| !range.contains(*num))
            .collect();

        let mut new_doc = self.doc.clone();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
            let pruned = new_doc.prune_objects();
            log::debug!(
                "deleted {} page(s), pruned {} object(s)",
                pages_to_delete.len(),
                pruned.len()
            );
        }

        Ok(new_doc)
    }

    /// Serialize `doc` and write it to `path`, replacing any existing file.
    ///
    /// The whole document is rendered in memory first, so a serialization
    /// failure never touches the destination.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut buf = Vec::new();
        doc.save_to(&mut buf)
            .map_err(|e| Error::Unexpected(format!("Failed to serialize PDF: {}", e)))?;

        std::fs::write(path, &buf).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("wrote {} bytes to {}", buf.len(), path.display());
        Ok(())
    }
}

/// Read a PDF file into memory, telling a missing file apart from other
/// I/O failures.
fn read_pdf_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| {
        let path = path.display().to_string();
        if source.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound { path }
        } else {
            Error::Io { path, source }
        }
    })
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
}

fn get_string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        _ => None,
    })
}

fn decode_pdf_string(bytes: &[u8]) -> Option<String> {
    if let Some(rest) = bytes.strip_prefix(b"\xFE\xFF") {
        // UTF-16 BE
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).ok()
    } else {
        // Latin-1 stands in for PDFDocEncoding
        Some(bytes.iter().map(|&b| b as char).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    /// In-memory document with `pages` empty pages.
    fn blank_document(pages: u32) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let kids: Vec<Object> = (0..pages)
            .map(|_| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                })
                .into()
            })
            .collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_extract_range_rejects_range_past_document() {
        let pdf = PdfDocument {
            doc: blank_document(2),
            path: "small.pdf".to_string(),
        };
        // Validated against a larger page count than the document has.
        let range = PageRange::new(1, 3, 3).unwrap();

        let err = pdf.extract_range(&range).err().unwrap();
        assert!(matches!(
            err,
            Error::InvalidRange(RangeError::OutOfBounds { total: 2, .. })
        ));
    }

    #[test]
    fn test_extract_range_keeps_requested_pages() {
        let pdf = PdfDocument {
            doc: blank_document(3),
            path: "three.pdf".to_string(),
        };
        let range = PageRange::new(2, 3, pdf.page_count()).unwrap();

        let extracted = pdf.extract_range(&range).unwrap();
        assert_eq!(extracted.get_pages().len(), 2);
        assert_eq!(pdf.page_count(), 3);
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(
            decode_pdf_string(b"Caf\xe9 menu").as_deref(),
            Some("Café menu")
        );
    }

    #[test]
    fn test_decode_utf16_with_bom() {
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69, 0x04, 0x14];
        assert_eq!(decode_pdf_string(&bytes).as_deref(), Some("HiД"));
    }

    #[test]
    fn test_decode_invalid_utf16() {
        // lone high surrogate
        let bytes = [0xFE, 0xFF, 0xD8, 0x00];
        assert_eq!(decode_pdf_string(&bytes), None);
    }

    #[test]
    fn test_open_missing_file() {
        let err = PdfDocument::open("/nonexistent/dir/input.pdf").err().unwrap();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_garbage_is_invalid_document() {
        let err = PdfDocument::from_bytes(b"definitely not a pdf", "junk.pdf")
            .err()
            .unwrap();
        assert!(matches!(err, Error::InvalidDocument { .. }));
    }
}
