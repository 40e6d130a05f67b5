//! Batch - template-based PDF batch generation
//!
//! This crate provides the domain layer of lotepdf:
//! - Profile data model: spreadsheet column typing and per-field PDF
//!   placements with text styling (serde, compatible with legacy records)
//! - Page geometry tables and the millimeter-to-point coordinate transform
//! - Spreadsheet reading (`.xlsx`/`.xls`)
//! - Template rasterization behind a trait seam (pdfium in production)
//! - Year/month-partitioned output storage
//! - The batch generation engine: one output PDF per spreadsheet row
//!
//! # Example
//!
//! ```ignore
//! use batch::{BatchGenerationEngine, PdfiumRasterizer, StorageConfig};
//!
//! let storage = StorageConfig::new("/srv/pdfs");
//! let engine = BatchGenerationEngine::new(PdfiumRasterizer::new(), storage);
//! let count = engine.generate(
//!     "clientes.xlsx".as_ref(),
//!     &document_profile,
//!     &spreadsheet_profile,
//!     chrono::Local::now().date_naive(),
//!     |msg| println!("{msg}"),
//! )?;
//! ```

pub mod engine;
pub mod format;
pub mod pagesize;
pub mod raster;
pub mod schema;
pub mod spreadsheet;
pub mod storage;

pub use engine::BatchGenerationEngine;
pub use format::{format_value, RawValue};
pub use raster::{PdfiumRasterizer, TemplateRasterizer, GENERATION_DPI, PREVIEW_DPI};
pub use schema::{
    ColumnMapping, ColumnType, DocumentProfile, PageFormat, PageOrientation, PdfFieldMapping,
    SpreadsheetProfile, TextStyle,
};
pub use spreadsheet::{read_headers, SheetData};
pub use storage::StorageConfig;

use thiserror::Error;

/// Errors that can occur during batch generation
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to read spreadsheet: {0}")]
    SpreadsheetRead(String),

    #[error("Failed to render template: {0}")]
    TemplateRender(String),

    #[error("No free output filename for \"{0}\"")]
    FilenameExhausted(String),

    #[error("PDF output error: {0}")]
    Pdf(#[from] pdf_write::PdfError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, BatchError>;
