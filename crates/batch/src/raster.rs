//! Template rasterization
//!
//! The engine never reads the template PDF directly; it asks a
//! [`TemplateRasterizer`] for page counts and page bitmaps. The production
//! implementation uses pdfium. Tests substitute a fake so no native library
//! is needed.

use image::RgbImage;
use pdfium_render::prelude::*;
use std::path::Path;

/// DPI used when rasterizing template pages for generation
pub const GENERATION_DPI: f32 = 200.0;

/// DPI used for interactive preview rendering
pub const PREVIEW_DPI: f32 = 150.0;

/// Supplies template page counts and rasterized page backgrounds.
///
/// Both operations are total: failures surface as `0` or `None`, never as
/// errors, so callers decide what a missing template means for them.
pub trait TemplateRasterizer {
    /// Number of pages in the template, or 0 if it cannot be opened
    fn page_count(&self, pdf_path: &Path) -> usize;

    /// Rasterize one page (0-indexed) at the given DPI. `None` on any
    /// failure, including an out-of-range page index.
    fn render_page(&self, pdf_path: &Path, page_index: usize, dpi: f32) -> Option<RgbImage>;
}

/// Pdfium-backed rasterizer
///
/// Binds to a pdfium library next to the executable first, then to a
/// system-wide install.
#[derive(Default)]
pub struct PdfiumRasterizer;

impl PdfiumRasterizer {
    pub fn new() -> Self {
        Self
    }

    fn bind() -> Option<Pdfium> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .ok()?;
        Some(Pdfium::new(bindings))
    }
}

impl TemplateRasterizer for PdfiumRasterizer {
    fn page_count(&self, pdf_path: &Path) -> usize {
        let Some(pdfium) = Self::bind() else {
            log::warn!("pdfium library not available");
            return 0;
        };

        let count = match pdfium.load_pdf_from_file(pdf_path, None) {
            Ok(document) => document.pages().len() as usize,
            Err(e) => {
                log::warn!("could not open template {}: {e}", pdf_path.display());
                0
            }
        };
        count
    }

    fn render_page(&self, pdf_path: &Path, page_index: usize, dpi: f32) -> Option<RgbImage> {
        let pdfium = Self::bind()?;
        let document = pdfium.load_pdf_from_file(pdf_path, None).ok()?;
        let page = document.pages().get(page_index as u16).ok()?;

        // PDF points are 72 per inch
        let scale = dpi / 72.0;
        let pixel_width = (page.width().value * scale) as i32;
        let pixel_height = (page.height().value * scale) as i32;

        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(pixel_width)
                    .set_target_height(pixel_height),
            )
            .ok()?;

        Some(bitmap.as_image().into_rgb8())
    }
}
