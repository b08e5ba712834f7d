//! PDF fixtures shared by the integration tests.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::path::{Path, PathBuf};

/// Metadata written into the fixture's `/Info` dictionary.
pub struct Metadata<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub creation_date: &'a str,
}

/// Build an in-memory PDF with `pages` pages. Page `n` draws the string
/// `Page n` so copies can be recognised after extraction.
pub fn build_pdf(pages: u32, metadata: Option<&Metadata>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for n in 1..=pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(format!("Page {}", n))]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(meta) = metadata {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(meta.title),
            "Author" => Object::string_literal(meta.author),
            "CreationDate" => Object::string_literal(meta.creation_date),
        });
        doc.trailer.set("Info", info_id);
    }

    doc
}

/// Write a fixture with `pages` pages to `dir/name` and return its path.
pub fn write_pdf(dir: &Path, name: &str, pages: u32) -> PathBuf {
    write_pdf_with_metadata(dir, name, pages, None)
}

pub fn write_pdf_with_metadata(
    dir: &Path,
    name: &str,
    pages: u32,
    metadata: Option<&Metadata>,
) -> PathBuf {
    let path = dir.join(name);
    let mut doc = build_pdf(pages, metadata);
    doc.save(&path).unwrap();
    path
}

/// The `Page n` markers of every page of the PDF at `path`, in page order.
pub fn page_markers(path: &Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .values()
        .map(|&page_id| page_marker(&doc, page_id))
        .collect()
}

fn page_marker(doc: &Document, page_id: ObjectId) -> String {
    let content = doc.get_page_content(page_id).unwrap();
    let content = Content::decode(&content).unwrap();
    content
        .operations
        .iter()
        .find(|op| op.operator == "Tj")
        .and_then(|op| op.operands.first())
        .and_then(|obj| obj.as_str().ok())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}
