//! Standard 14 font handling
//!
//! The Standard 14 fonts are guaranteed to be available in every conforming
//! PDF viewer, so no font program is embedded. Glyph widths come from the
//! Adobe AFM metrics and are needed for measuring rendered text (underline
//! extents). Text is encoded as WinAnsi (CP1252), which covers the
//! Portuguese-accented characters produced by the value formatters.

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A Standard 14 font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    /// Map a desktop font-family name onto one of the base families.
    ///
    /// Profile records carry the family names the desktop environment shows
    /// ("Arial", "Times New Roman", "Courier New"); anything unrecognized
    /// falls back to Helvetica.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "times" | "times new roman" | "times-roman" => FontFamily::Times,
            "courier" | "courier new" => FontFamily::Courier,
            _ => FontFamily::Helvetica,
        }
    }

    /// Resolve the metrics for a weight/style variant of this family.
    pub fn metrics(&self, weight: FontWeight, style: FontStyle) -> &'static FontMetrics {
        match (self, weight, style) {
            (FontFamily::Helvetica, FontWeight::Regular, FontStyle::Normal) => &HELVETICA,
            (FontFamily::Helvetica, FontWeight::Bold, FontStyle::Normal) => &HELVETICA_BOLD,
            (FontFamily::Helvetica, FontWeight::Regular, FontStyle::Italic) => &HELVETICA_OBLIQUE,
            (FontFamily::Helvetica, FontWeight::Bold, FontStyle::Italic) => {
                &HELVETICA_BOLD_OBLIQUE
            }
            (FontFamily::Times, FontWeight::Regular, FontStyle::Normal) => &TIMES_ROMAN,
            (FontFamily::Times, FontWeight::Bold, FontStyle::Normal) => &TIMES_BOLD,
            (FontFamily::Times, FontWeight::Regular, FontStyle::Italic) => &TIMES_ITALIC,
            (FontFamily::Times, FontWeight::Bold, FontStyle::Italic) => &TIMES_BOLD_ITALIC,
            (FontFamily::Courier, FontWeight::Regular, FontStyle::Normal) => &COURIER,
            (FontFamily::Courier, FontWeight::Bold, FontStyle::Normal) => &COURIER_BOLD,
            (FontFamily::Courier, FontWeight::Regular, FontStyle::Italic) => &COURIER_OBLIQUE,
            (FontFamily::Courier, FontWeight::Bold, FontStyle::Italic) => &COURIER_BOLD_OBLIQUE,
        }
    }
}

/// Glyph width source for a font
#[derive(Debug, Clone, Copy)]
enum Widths {
    /// AFM widths for ASCII 0x20..=0x7E, in 1/1000 em units
    Table(&'static [u16; 95]),
    /// Monospaced width for every glyph
    Fixed(u16),
}

/// Metrics for one Standard 14 font
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// PostScript name used as the PDF BaseFont
    pub postscript_name: &'static str,
    widths: Widths,
    /// Width used for characters outside the ASCII table
    default_width: u16,
}

impl FontMetrics {
    /// Width of a single character in 1/1000 em units
    fn char_width(&self, c: char) -> u16 {
        match self.widths {
            Widths::Fixed(w) => w,
            Widths::Table(table) => {
                let code = c as u32;
                if (0x20..=0x7E).contains(&code) {
                    table[(code - 0x20) as usize]
                } else {
                    self.default_width
                }
            }
        }
    }

    /// Width of a string in points at the given font size
    pub fn text_width_points(&self, text: &str, font_size: f32) -> f64 {
        let units: u64 = text.chars().map(|c| self.char_width(c) as u64).sum();
        units as f64 * font_size as f64 / 1000.0
    }
}

/// Encode text as WinAnsi (CP1252) bytes.
///
/// Characters with no WinAnsi code point are replaced by `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            match code {
                0x20..=0x7E | 0xA0..=0xFF => code as u8,
                _ => win_ansi_special(c).unwrap_or(b'?'),
            }
        })
        .collect()
}

/// CP1252 code points in the 0x80..0x9F range
fn win_ansi_special(c: char) -> Option<u8> {
    let code = match c {
        '\u{20AC}' => 0x80, // euro
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85, // ellipsis
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96, // en dash
        '\u{2014}' => 0x97, // em dash
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99, // trademark
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(code)
}

/// Render bytes as a PDF hex string, e.g. `<416C696365>`
pub fn to_hex_string(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2 + 2);
    s.push('<');
    for b in bytes {
        s.push_str(&format!("{b:02X}"));
    }
    s.push('>');
    s
}

// AFM widths for ASCII 0x20..=0x7E.

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

const HELVETICA: FontMetrics = FontMetrics {
    postscript_name: "Helvetica",
    widths: Widths::Table(&HELVETICA_WIDTHS),
    default_width: 556,
};

const HELVETICA_BOLD: FontMetrics = FontMetrics {
    postscript_name: "Helvetica-Bold",
    widths: Widths::Table(&HELVETICA_BOLD_WIDTHS),
    default_width: 556,
};

const HELVETICA_OBLIQUE: FontMetrics = FontMetrics {
    postscript_name: "Helvetica-Oblique",
    widths: Widths::Table(&HELVETICA_WIDTHS),
    default_width: 556,
};

const HELVETICA_BOLD_OBLIQUE: FontMetrics = FontMetrics {
    postscript_name: "Helvetica-BoldOblique",
    widths: Widths::Table(&HELVETICA_BOLD_WIDTHS),
    default_width: 556,
};

const TIMES_ROMAN: FontMetrics = FontMetrics {
    postscript_name: "Times-Roman",
    widths: Widths::Table(&TIMES_ROMAN_WIDTHS),
    default_width: 500,
};

const TIMES_BOLD: FontMetrics = FontMetrics {
    postscript_name: "Times-Bold",
    widths: Widths::Table(&TIMES_BOLD_WIDTHS),
    default_width: 500,
};

// Italic variants reuse the upright widths of their weight; the AFM
// differences are a few thousandths of an em and irrelevant for underline
// extents.
const TIMES_ITALIC: FontMetrics = FontMetrics {
    postscript_name: "Times-Italic",
    widths: Widths::Table(&TIMES_ROMAN_WIDTHS),
    default_width: 500,
};

const TIMES_BOLD_ITALIC: FontMetrics = FontMetrics {
    postscript_name: "Times-BoldItalic",
    widths: Widths::Table(&TIMES_BOLD_WIDTHS),
    default_width: 500,
};

const COURIER: FontMetrics = FontMetrics {
    postscript_name: "Courier",
    widths: Widths::Fixed(600),
    default_width: 600,
};

const COURIER_BOLD: FontMetrics = FontMetrics {
    postscript_name: "Courier-Bold",
    widths: Widths::Fixed(600),
    default_width: 600,
};

const COURIER_OBLIQUE: FontMetrics = FontMetrics {
    postscript_name: "Courier-Oblique",
    widths: Widths::Fixed(600),
    default_width: 600,
};

const COURIER_BOLD_OBLIQUE: FontMetrics = FontMetrics {
    postscript_name: "Courier-BoldOblique",
    widths: Widths::Fixed(600),
    default_width: 600,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_family_from_name() {
        assert_eq!(FontFamily::from_name("Helvetica"), FontFamily::Helvetica);
        assert_eq!(FontFamily::from_name("Arial"), FontFamily::Helvetica);
        assert_eq!(FontFamily::from_name("Times New Roman"), FontFamily::Times);
        assert_eq!(FontFamily::from_name("courier new"), FontFamily::Courier);
        assert_eq!(FontFamily::from_name("Comic Sans"), FontFamily::Helvetica);
    }

    #[test]
    fn test_postscript_names() {
        let family = FontFamily::Helvetica;
        assert_eq!(
            family
                .metrics(FontWeight::Regular, FontStyle::Normal)
                .postscript_name,
            "Helvetica"
        );
        assert_eq!(
            family
                .metrics(FontWeight::Bold, FontStyle::Normal)
                .postscript_name,
            "Helvetica-Bold"
        );
        assert_eq!(
            family
                .metrics(FontWeight::Regular, FontStyle::Italic)
                .postscript_name,
            "Helvetica-Oblique"
        );
        assert_eq!(
            family
                .metrics(FontWeight::Bold, FontStyle::Italic)
                .postscript_name,
            "Helvetica-BoldOblique"
        );
        assert_eq!(
            FontFamily::Times
                .metrics(FontWeight::Bold, FontStyle::Italic)
                .postscript_name,
            "Times-BoldItalic"
        );
    }

    #[test]
    fn test_text_width_helvetica() {
        let metrics = FontFamily::Helvetica.metrics(FontWeight::Regular, FontStyle::Normal);
        // space = 278/1000 em
        assert_eq!(metrics.text_width_points(" ", 10.0), 2.78);
        // "00" = 2 * 556
        assert_eq!(metrics.text_width_points("00", 10.0), 11.12);
    }

    #[test]
    fn test_text_width_courier_monospace() {
        let metrics = FontFamily::Courier.metrics(FontWeight::Regular, FontStyle::Normal);
        let narrow = metrics.text_width_points("iii", 12.0);
        let wide = metrics.text_width_points("WWW", 12.0);
        assert_eq!(narrow, wide);
    }

    #[test]
    fn test_text_width_empty() {
        let metrics = FontFamily::Helvetica.metrics(FontWeight::Regular, FontStyle::Normal);
        assert_eq!(metrics.text_width_points("", 12.0), 0.0);
    }

    #[test]
    fn test_encode_win_ansi_ascii() {
        assert_eq!(encode_win_ansi("Alice"), b"Alice".to_vec());
    }

    #[test]
    fn test_encode_win_ansi_accented() {
        // Latin-1 range maps directly
        assert_eq!(encode_win_ansi("ç"), vec![0xE7]);
        assert_eq!(encode_win_ansi("ã"), vec![0xE3]);
        assert_eq!(encode_win_ansi("às"), vec![0xE0, b's']);
    }

    #[test]
    fn test_encode_win_ansi_cp1252_specials() {
        assert_eq!(encode_win_ansi("\u{20AC}"), vec![0x80]);
        assert_eq!(encode_win_ansi("\u{2013}"), vec![0x96]);
    }

    #[test]
    fn test_encode_win_ansi_unmappable() {
        // Thai character has no WinAnsi slot
        assert_eq!(encode_win_ansi("ก"), vec![b'?']);
    }

    #[test]
    fn test_to_hex_string() {
        assert_eq!(to_hex_string(b"Alice"), "<416C696365>");
        assert_eq!(to_hex_string(&[]), "<>");
    }
}
