//! Page geometry tables and the millimeter/point coordinate transform
//!
//! Field positions are stored in millimeters from the page's top-left corner
//! (the editor's coordinate space); PDF drawing uses points from the
//! bottom-left. The same table backs both the editor preview and the
//! generator so a field placed on screen reproduces at the identical
//! millimeter offset in the output.

use crate::schema::{PageFormat, PageOrientation};

pub const MM_TO_POINTS: f64 = 2.83465;
pub const POINTS_TO_MM: f64 = 0.352778;

/// Portrait page sizes in points (width, height)
const PAGE_SIZES: [(PageFormat, f64, f64); 8] = [
    (PageFormat::A1, 1683.78, 2383.94),
    (PageFormat::A2, 1190.55, 1683.78),
    (PageFormat::A3, 841.89, 1190.55),
    (PageFormat::A4, 595.28, 841.89),
    (PageFormat::A5, 419.53, 595.28),
    (PageFormat::A6, 297.64, 419.53),
    (PageFormat::Letter, 612.0, 792.0),
    (PageFormat::Legal, 612.0, 1008.0),
];

/// Page size in points for a format and orientation
pub fn page_size_points(format: PageFormat, orientation: PageOrientation) -> (f64, f64) {
    let (width, height) = PAGE_SIZES
        .iter()
        .find(|(f, _, _)| *f == format)
        .map(|(_, w, h)| (*w, *h))
        .unwrap_or((595.28, 841.89));

    match orientation {
        PageOrientation::Portrait => (width, height),
        PageOrientation::Landscape => (height, width),
    }
}

/// Page size in millimeters for a format and orientation
pub fn page_size_mm(format: PageFormat, orientation: PageOrientation) -> (f64, f64) {
    let (width_pt, height_pt) = page_size_points(format, orientation);
    (width_pt * POINTS_TO_MM, height_pt * POINTS_TO_MM)
}

/// Convert a field position in millimeters (origin top-left) to PDF point
/// coordinates (origin bottom-left).
pub fn to_render_coordinates(x_mm: f64, y_mm: f64, page_height_pt: f64) -> (f64, f64) {
    let x_pt = x_mm * MM_TO_POINTS;
    let y_pt = page_height_pt - y_mm * MM_TO_POINTS;
    (x_pt, y_pt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_a4_portrait() {
        assert_eq!(
            page_size_points(PageFormat::A4, PageOrientation::Portrait),
            (595.28, 841.89)
        );
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let (w, h) = page_size_points(PageFormat::A4, PageOrientation::Landscape);
        assert_eq!((w, h), (841.89, 595.28));

        let (w, h) = page_size_points(PageFormat::Legal, PageOrientation::Landscape);
        assert_eq!((w, h), (1008.0, 612.0));
    }

    #[test]
    fn test_page_size_mm_a4() {
        let (w_mm, h_mm) = page_size_mm(PageFormat::A4, PageOrientation::Portrait);
        assert!((w_mm - 210.0).abs() < 0.1);
        assert!((h_mm - 297.0).abs() < 0.1);
    }

    #[test]
    fn test_render_coordinates_flip_y() {
        let (_, height_pt) = page_size_points(PageFormat::A4, PageOrientation::Portrait);
        let (x_pt, y_pt) = to_render_coordinates(10.0, 20.0, height_pt);

        assert!((x_pt - 28.3465).abs() < 1e-9);
        assert!((y_pt - (841.89 - 56.693)).abs() < 1e-9);
    }

    #[test]
    fn test_coordinate_round_trip() {
        let (w_mm, h_mm) = page_size_mm(PageFormat::A3, PageOrientation::Landscape);
        let (_, height_pt) = page_size_points(PageFormat::A3, PageOrientation::Landscape);

        for &(x_mm, y_mm) in &[(0.0, 0.0), (w_mm / 2.0, h_mm / 2.0), (w_mm, h_mm)] {
            let (x_pt, y_pt) = to_render_coordinates(x_mm, y_mm, height_pt);
            let x_back = x_pt / MM_TO_POINTS;
            let y_back = (height_pt - y_pt) / MM_TO_POINTS;
            assert!((x_back - x_mm).abs() < 1e-6);
            assert!((y_back - y_mm).abs() < 1e-6);
        }
    }
}
