//! Batch generation engine
//!
//! Drives one generation run: read the spreadsheet, then for every data row
//! stamp the formatted values onto rasterized template pages and write one
//! output PDF. Rows are processed strictly in file order; any structural
//! failure aborts the run (files already written stay on disk).

use crate::format::{format_value, RawValue};
use crate::pagesize::{page_size_points, to_render_coordinates};
use crate::raster::{TemplateRasterizer, GENERATION_DPI};
use crate::schema::{DocumentProfile, SpreadsheetProfile};
use crate::spreadsheet::SheetData;
use crate::storage::StorageConfig;
use crate::{BatchError, Result};
use chrono::NaiveDate;
use image::{DynamicImage, ImageFormat, RgbImage};
use pdf_write::OutputDocument;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Upper bound on collision-suffix probing per row
const MAX_FILENAME_ATTEMPTS: u32 = 10_000;

/// Distance in points between the text baseline and its underline rule
const UNDERLINE_OFFSET: f64 = 2.0;

pub struct BatchGenerationEngine<R: TemplateRasterizer> {
    rasterizer: R,
    storage: StorageConfig,
}

impl<R: TemplateRasterizer> BatchGenerationEngine<R> {
    pub fn new(rasterizer: R, storage: StorageConfig) -> Self {
        Self {
            rasterizer,
            storage,
        }
    }

    /// Generate one PDF per spreadsheet data row. Returns the number of
    /// documents written.
    ///
    /// Output files land in the year/month directory for `base_date`.
    /// `progress` receives one human-readable message per major step.
    pub fn generate(
        &self,
        spreadsheet_path: &Path,
        document_profile: &DocumentProfile,
        spreadsheet_profile: &SpreadsheetProfile,
        base_date: NaiveDate,
        mut progress: impl FnMut(&str),
    ) -> Result<usize> {
        progress("Lendo planilha...");
        let sheet = SheetData::read(spreadsheet_path, spreadsheet_profile.header_row)?;

        let output_dir = self.storage.generated_dir_for(base_date)?;
        log::info!(
            "generating {} rows from {} into {}",
            sheet.row_count(),
            spreadsheet_path.display(),
            output_dir.display()
        );

        let total = sheet.row_count();
        let mut generated = 0;

        for (row_index, row) in sheet.rows().iter().enumerate() {
            let values = row_value_map(&sheet, spreadsheet_profile, row);

            let title_value = values
                .get(&document_profile.title_column)
                .map(RawValue::to_display_string)
                .unwrap_or_default();
            let title = sanitize_title(&title_value);

            let output_path = free_output_path(&output_dir, &title, &document_profile.name)?;
            self.render_document(&values, document_profile, spreadsheet_profile, &output_path)?;

            progress(&format!(
                "Processando linha {} de {}...",
                row_index + 1,
                total
            ));
            generated += 1;
        }

        progress(&format!("Geração concluída. {generated} PDFs criados."));
        Ok(generated)
    }

    /// Render one row's document: every template page gets its rasterized
    /// background plus the stamped fields mapped to that page.
    fn render_document(
        &self,
        values: &HashMap<String, RawValue>,
        document_profile: &DocumentProfile,
        spreadsheet_profile: &SpreadsheetProfile,
        output_path: &Path,
    ) -> Result<()> {
        let (width_pt, height_pt) = page_size_points(
            document_profile.page_format,
            document_profile.page_orientation,
        );

        let template_path = Path::new(&document_profile.pdf_path);
        let total_pages = self.rasterizer.page_count(template_path);
        if total_pages == 0 {
            return Err(BatchError::TemplateRender(format!(
                "template has no readable pages: {}",
                template_path.display()
            )));
        }

        let mut doc = OutputDocument::new();
        let mappings_by_page = document_profile.mappings_by_page();

        for page_index in 0..total_pages {
            let page = doc.add_page(width_pt, height_pt);

            let background = self
                .rasterizer
                .render_page(template_path, page_index, GENERATION_DPI)
                .ok_or_else(|| {
                    BatchError::TemplateRender(format!(
                        "could not rasterize page {} of {}",
                        page_index + 1,
                        template_path.display()
                    ))
                })?;
            doc.insert_image(&encode_jpeg(background)?, page, 0.0, 0.0, width_pt, height_pt)?;

            // Mappings past the template's page count never reach here
            let Some(mappings) = mappings_by_page.get(&page_index) else {
                continue;
            };

            for mapping in mappings {
                let column_type = spreadsheet_profile
                    .column(&mapping.column_name)
                    .map(|c| c.column_type)
                    .unwrap_or_default();
                let text = match values.get(&mapping.column_name) {
                    Some(raw) => format_value(raw, column_type),
                    None => String::new(),
                };

                let style = &mapping.style;
                doc.set_font(style.family(), style.font_size_clamped());
                doc.set_font_weight(style.weight());
                doc.set_font_style(style.slant());
                doc.set_text_color(style.color_rgb());

                let (x_pt, y_pt) = to_render_coordinates(mapping.x, mapping.y, height_pt);
                doc.insert_text(&text, page, x_pt, y_pt)?;

                if style.underline && !text.is_empty() {
                    let text_width = doc.text_width(&text);
                    doc.draw_line(
                        page,
                        x_pt,
                        y_pt - UNDERLINE_OFFSET,
                        x_pt + text_width,
                        y_pt - UNDERLINE_OFFSET,
                    )?;
                }
            }
        }

        doc.set_author(&os_user());
        if let Some(filename) = output_path.file_name().and_then(|n| n.to_str()) {
            doc.set_title(filename);
        }
        doc.save(output_path)?;

        log::debug!("wrote {}", output_path.display());
        Ok(())
    }
}

/// Resolve each profile column against the parsed sheet and key the result
/// by custom name. Header lookup first, positional index as fallback.
fn row_value_map(
    sheet: &SheetData,
    profile: &SpreadsheetProfile,
    row: &[RawValue],
) -> HashMap<String, RawValue> {
    profile
        .columns
        .iter()
        .map(|col| {
            (
                col.custom_name.clone(),
                sheet.value(row, &col.original_header, col.index),
            )
        })
        .collect()
}

/// Reduce a title value to filename-safe characters, with a fixed fallback
/// for rows whose title cell is empty or all garbage.
fn sanitize_title(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    let trimmed = kept.trim_end();
    if trimmed.is_empty() {
        "Documento".to_string()
    } else {
        trimmed.to_string()
    }
}

/// First free path among `{title}_{profile}.pdf`, `..._1.pdf`, `..._2.pdf`.
/// Existence is re-checked per candidate because the directory grows while
/// the run writes files.
fn free_output_path(dir: &Path, title: &str, profile_name: &str) -> Result<PathBuf> {
    let base = format!("{title}_{profile_name}");

    let candidate = dir.join(format!("{base}.pdf"));
    if !candidate.exists() {
        return Ok(candidate);
    }

    for n in 1..=MAX_FILENAME_ATTEMPTS {
        let candidate = dir.join(format!("{base}_{n}.pdf"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(BatchError::FilenameExhausted(format!("{base}.pdf")))
}

fn encode_jpeg(image: RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .map_err(|e| BatchError::TemplateRender(e.to_string()))?;
    Ok(bytes)
}

/// Current OS user for document metadata
fn os_user() -> String {
    std::env::var("USERNAME")
        .or_else(|_| std::env::var("USER"))
        .unwrap_or_else(|_| "unknown".to_string())
}
