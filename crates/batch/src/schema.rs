//! Profile data model
//!
//! Serde representations match the legacy on-disk JSON records: enum values
//! are the Portuguese strings the profile editor writes, and fields added
//! over time (`page_index`, `style`, `page_format`) default when absent so
//! older records still load.

use pdf_write::{Color, FontFamily, FontStyle, FontWeight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared type of a spreadsheet column, driving value formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnType {
    #[default]
    #[serde(rename = "texto")]
    Text,
    #[serde(rename = "numero")]
    Number,
    #[serde(rename = "monetario")]
    Currency,
    #[serde(rename = "data")]
    Date,
    #[serde(rename = "data e hora")]
    DateTime,
    #[serde(rename = "cpf")]
    Cpf,
    #[serde(rename = "cnpj")]
    Cnpj,
    #[serde(rename = "telefone")]
    Phone,
    #[serde(rename = "email")]
    Email,
}

/// Output page format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageFormat {
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    Letter,
    Legal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageOrientation {
    #[default]
    #[serde(rename = "portrait")]
    Portrait,
    #[serde(rename = "landscape")]
    Landscape,
}

pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 72.0;

/// Typographic presentation of one stamped field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Hex RGB, e.g. "#1A2B3C"
    pub color: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 12.0,
            bold: false,
            italic: false,
            underline: false,
            color: "#000000".to_string(),
        }
    }
}

impl TextStyle {
    /// Font size clamped to the supported range
    pub fn font_size_clamped(&self) -> f32 {
        self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }

    pub fn family(&self) -> FontFamily {
        FontFamily::from_name(&self.font_family)
    }

    pub fn weight(&self) -> FontWeight {
        if self.bold {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        }
    }

    pub fn slant(&self) -> FontStyle {
        if self.italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        }
    }

    /// Parse the hex color, falling back to black on malformed input
    pub fn color_rgb(&self) -> Color {
        parse_hex_color(&self.color).unwrap_or_else(Color::black)
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::rgb(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

/// One spreadsheet column's identity and typing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Header text as found in the spreadsheet
    pub original_header: String,
    /// Stable display and reference key, unique within a profile
    pub custom_name: String,
    #[serde(default)]
    pub column_type: ColumnType,
    /// Positional fallback when the header text is not found
    #[serde(default)]
    pub index: usize,
}

/// Reusable description of an input spreadsheet's shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadsheetProfile {
    pub name: String,
    /// 0-indexed row containing the column headers
    #[serde(default)]
    pub header_row: usize,
    pub columns: Vec<ColumnMapping>,
}

impl SpreadsheetProfile {
    /// Find a column by its custom name
    pub fn column(&self, custom_name: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|c| c.custom_name == custom_name)
    }
}

/// Placement of one column's value on the template
///
/// Coordinates are millimeters measured from the page's top-left corner,
/// matching the on-screen preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfFieldMapping {
    pub column_name: String,
    pub x: f64,
    pub y: f64,
    /// 0-indexed template page
    #[serde(default)]
    pub page_index: usize,
    #[serde(default)]
    pub style: TextStyle,
}

/// A complete, reusable document-generation recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentProfile {
    pub name: String,
    /// Path to the template PDF
    pub pdf_path: String,
    #[serde(default)]
    pub spreadsheet_profile_name: String,
    /// Custom name of the column used to build output filenames
    pub title_column: String,
    #[serde(default)]
    pub field_mappings: Vec<PdfFieldMapping>,
    #[serde(default)]
    pub page_format: PageFormat,
    #[serde(default)]
    pub page_orientation: PageOrientation,
}

impl DocumentProfile {
    /// Insert a mapping, replacing any existing mapping for the same column
    /// regardless of which page it was on.
    pub fn add_or_replace_mapping(&mut self, mapping: PdfFieldMapping) {
        self.field_mappings
            .retain(|m| m.column_name != mapping.column_name);
        self.field_mappings.push(mapping);
    }

    pub fn remove_mapping(&mut self, column_name: &str) {
        self.field_mappings.retain(|m| m.column_name != column_name);
    }

    /// Mappings for one template page, in insertion order
    pub fn mappings_for_page(&self, page_index: usize) -> Vec<&PdfFieldMapping> {
        self.field_mappings
            .iter()
            .filter(|m| m.page_index == page_index)
            .collect()
    }

    /// Group mappings by page index, preserving insertion order within a page
    pub fn mappings_by_page(&self) -> BTreeMap<usize, Vec<&PdfFieldMapping>> {
        let mut groups: BTreeMap<usize, Vec<&PdfFieldMapping>> = BTreeMap::new();
        for mapping in &self.field_mappings {
            groups.entry(mapping.page_index).or_default().push(mapping);
        }
        groups
    }

    /// Change page format and orientation. Millimeter positions are
    /// interpreted relative to the page size, so any change clears all
    /// existing mappings.
    pub fn set_page_geometry(&mut self, format: PageFormat, orientation: PageOrientation) {
        if format != self.page_format || orientation != self.page_orientation {
            self.field_mappings.clear();
        }
        self.page_format = format;
        self.page_orientation = orientation;
    }
}
