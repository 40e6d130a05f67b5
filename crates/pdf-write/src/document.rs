//! PDF document building

use crate::font::{encode_win_ansi, to_hex_string, FontFamily, FontStyle, FontWeight};
use crate::image_xobject::{generate_image_operators, ImageXObject};
use crate::text::{generate_line_operators, generate_text_operators, TextRenderContext};
use crate::{PdfError, Result};
use lopdf::{dictionary, Dictionary, Object, Stream};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::path::Path;

/// RGB color with components in the 0.0 to 1.0 range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Buffered state for one page, flushed into PDF objects on save
struct PageBuffer {
    width: f64,
    height: f64,
    content: Vec<u8>,
    /// Font resource name -> PostScript name
    fonts: BTreeMap<String, &'static str>,
    /// Image resource name -> index into the image table
    images: BTreeMap<String, usize>,
}

/// A PDF document under construction
///
/// Pages are added with explicit sizes in points and drawn onto with text,
/// line, and image calls. All coordinates are native PDF coordinates with the
/// origin at the bottom-left of the page. The document is assembled into a
/// PDF file only when [`save`](Self::save) or [`to_bytes`](Self::to_bytes)
/// is called.
pub struct OutputDocument {
    pages: Vec<PageBuffer>,
    /// Embedded images, deduplicated by content hash
    images: Vec<(String, ImageXObject)>,
    image_cache: HashMap<u64, usize>,
    /// PostScript name -> font resource name, shared across pages
    font_resources: HashMap<&'static str, String>,
    font_family: FontFamily,
    font_weight: FontWeight,
    font_style: FontStyle,
    font_size: f32,
    text_color: Color,
    author: Option<String>,
    title: Option<String>,
}

impl OutputDocument {
    /// Create an empty document with default text state
    /// (Helvetica 12pt, black).
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            images: Vec::new(),
            image_cache: HashMap::new(),
            font_resources: HashMap::new(),
            font_family: FontFamily::Helvetica,
            font_weight: FontWeight::Regular,
            font_style: FontStyle::Normal,
            font_size: 12.0,
            text_color: Color::black(),
            author: None,
            title: None,
        }
    }

    /// Append a page with the given size in points. Returns the 1-based
    /// page number.
    pub fn add_page(&mut self, width: f64, height: f64) -> usize {
        self.pages.push(PageBuffer {
            width,
            height,
            content: Vec::new(),
            fonts: BTreeMap::new(),
            images: BTreeMap::new(),
        });
        self.pages.len()
    }

    /// Number of pages added so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Set the current font family and size
    pub fn set_font(&mut self, family: FontFamily, size: f32) {
        self.font_family = family;
        self.font_size = size;
    }

    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Width of `text` in points at the current font and size
    pub fn text_width(&self, text: &str) -> f64 {
        self.font_family
            .metrics(self.font_weight, self.font_style)
            .text_width_points(text, self.font_size)
    }

    /// Draw `text` on `page` with its baseline origin at (x, y).
    ///
    /// Empty text is a no-op. Characters outside the WinAnsi repertoire are
    /// rendered as '?'.
    pub fn insert_text(&mut self, text: &str, page: usize, x: f64, y: f64) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.check_page(page)?;

        let metrics = self.font_family.metrics(self.font_weight, self.font_style);
        let font_name = self.font_resource(metrics.postscript_name);

        let encoded = encode_win_ansi(text);
        let ctx = TextRenderContext {
            font_name: font_name.clone(),
            font_size: self.font_size,
            color: self.text_color,
        };
        let ops = generate_text_operators(&to_hex_string(&encoded), x, y, &ctx);

        let buffer = &mut self.pages[page - 1];
        buffer.fonts.insert(font_name, metrics.postscript_name);
        buffer.content.extend_from_slice(&ops);
        Ok(())
    }

    /// Draw a 1pt line on `page` from (x1, y1) to (x2, y2) in the current
    /// text color.
    pub fn draw_line(&mut self, page: usize, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        self.check_page(page)?;
        let ops = generate_line_operators(x1, y1, x2, y2, 1.0, self.text_color);
        self.pages[page - 1].content.extend_from_slice(&ops);
        Ok(())
    }

    /// Draw an image on `page`, stretched to cover the rectangle with
    /// lower-left corner (x, y) and the given size in points.
    ///
    /// JPEG and PNG data are accepted. Identical image bytes are embedded
    /// only once even when drawn on several pages.
    pub fn insert_image(
        &mut self,
        data: &[u8],
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        self.check_page(page)?;

        let mut hasher = DefaultHasher::new();
        data.hash(&mut hasher);
        let key = hasher.finish();

        let index = match self.image_cache.get(&key) {
            Some(&index) => index,
            None => {
                let xobject = ImageXObject::from_bytes(data)?;
                let name = format!("Im{}", self.images.len() + 1);
                self.images.push((name, xobject));
                let index = self.images.len() - 1;
                self.image_cache.insert(key, index);
                index
            }
        };

        let name = self.images[index].0.clone();
        let ops = generate_image_operators(&name, x, y, width, height);

        let buffer = &mut self.pages[page - 1];
        buffer.images.insert(name, index);
        buffer.content.extend_from_slice(&ops);
        Ok(())
    }

    /// Set the Author entry of the document information dictionary
    pub fn set_author(&mut self, author: &str) {
        self.author = Some(author.to_string());
    }

    /// Set the Title entry of the document information dictionary
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Write the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut doc = self.build()?;
        doc.save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Serialize the document to a byte buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.build()?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(bytes)
    }

    fn check_page(&self, page: usize) -> Result<()> {
        if page == 0 || page > self.pages.len() {
            return Err(PdfError::InvalidPage(page, self.pages.len()));
        }
        Ok(())
    }

    fn font_resource(&mut self, postscript_name: &'static str) -> String {
        if let Some(name) = self.font_resources.get(postscript_name) {
            return name.clone();
        }
        let name = format!("F{}", self.font_resources.len() + 1);
        self.font_resources.insert(postscript_name, name.clone());
        name
    }

    /// Assemble the buffered pages into a lopdf document
    fn build(&self) -> Result<lopdf::Document> {
        if self.pages.is_empty() {
            return Err(PdfError::StructureError(
                "document has no pages".to_string(),
            ));
        }

        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // Standard 14 font dictionaries, one per PostScript name
        let mut font_ids: HashMap<&str, lopdf::ObjectId> = HashMap::new();
        for (postscript_name, _) in &self.font_resources {
            let id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => Object::Name(postscript_name.as_bytes().to_vec()),
                "Encoding" => "WinAnsiEncoding",
            });
            font_ids.insert(*postscript_name, id);
        }

        let image_ids: Vec<lopdf::ObjectId> = self
            .images
            .iter()
            .map(|(_, xobject)| doc.add_object(xobject.to_pdf_stream()))
            .collect();

        let mut kids = Vec::with_capacity(self.pages.len());
        for buffer in &self.pages {
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                buffer.content.clone(),
            ));

            let mut resources = Dictionary::new();
            if !buffer.fonts.is_empty() {
                let mut fonts = Dictionary::new();
                for (resource_name, postscript_name) in &buffer.fonts {
                    fonts.set(
                        resource_name.as_bytes(),
                        Object::Reference(font_ids[postscript_name]),
                    );
                }
                resources.set("Font", Object::Dictionary(fonts));
            }
            if !buffer.images.is_empty() {
                let mut xobjects = Dictionary::new();
                for (resource_name, &index) in &buffer.images {
                    xobjects.set(
                        resource_name.as_bytes(),
                        Object::Reference(image_ids[index]),
                    );
                }
                resources.set("XObject", Object::Dictionary(xobjects));
            }

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    buffer.width.into(),
                    buffer.height.into(),
                ],
                "Resources" => Object::Dictionary(resources),
                "Contents" => Object::Reference(content_id),
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        if self.author.is_some() || self.title.is_some() {
            let mut info = Dictionary::new();
            if let Some(author) = &self.author {
                info.set("Author", Object::string_literal(author.as_str()));
            }
            if let Some(title) = &self.title {
                info.set("Title", Object::string_literal(title.as_str()));
            }
            let info_id = doc.add_object(Object::Dictionary(info));
            doc.trailer.set("Info", Object::Reference(info_id));
        }

        Ok(doc)
    }
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}
