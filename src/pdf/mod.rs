mod document;
pub mod text;

pub use document::{DocumentInfo, PdfDocument};
