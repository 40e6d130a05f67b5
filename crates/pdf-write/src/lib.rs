//! PDF Write - Low-level PDF output
//!
//! This crate provides functionality for:
//! - Building multi-page PDF documents from scratch with explicit page sizes
//! - Drawing text with the Standard 14 fonts (Helvetica, Times, Courier)
//! - Drawing line rules (underlines)
//! - Inserting background images (JPEG, PNG)
//! - Setting document metadata and saving
//!
//! Coordinates passed to drawing calls are native PDF points with the origin
//! at the bottom-left corner of the page.
//!
//! # Example
//!
//! ```ignore
//! use pdf_write::{FontFamily, OutputDocument};
//!
//! let mut doc = OutputDocument::new();
//! let page = doc.add_page(595.28, 841.89);
//! doc.set_font(FontFamily::Helvetica, 12.0);
//! doc.insert_text("Hello, World!", page, 100.0, 700.0)?;
//! doc.save("output.pdf")?;
//! ```

mod document;
mod font;
mod image_xobject;
mod text;

pub use document::{Color, OutputDocument};
pub use font::{encode_win_ansi, to_hex_string, FontFamily, FontMetrics, FontStyle, FontWeight};
pub use image_xobject::{generate_image_operators, ImageXObject};
pub use text::{generate_line_operators, generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF output
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("PDF structure error: {0}")]
    StructureError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF output operations
pub type Result<T> = std::result::Result<T, PdfError>;
