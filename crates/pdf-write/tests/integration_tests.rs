use pdf_write::{Color, FontFamily, FontWeight, OutputDocument};

fn minimal_jpeg() -> Vec<u8> {
    vec![
        0xFF, 0xD8, // SOI
        0xFF, 0xC0, // SOF0
        0x00, 0x11, // length
        0x08, // precision
        0x00, 0x02, // height 2
        0x00, 0x04, // width 4
        0x03, // components
        0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01, 0xFF, 0xD9,
    ]
}

fn page_content(doc: &lopdf::Document, page_number: u32) -> String {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let content = doc.get_page_content(page_id).unwrap();
    String::from_utf8(content).unwrap()
}

#[test]
fn test_saved_document_reparses() {
    let mut doc = OutputDocument::new();
    doc.add_page(595.28, 841.89);
    doc.add_page(419.53, 595.28);
    doc.insert_text("Alice", 1, 100.0, 700.0).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();

    assert_eq!(parsed.get_pages().len(), 2);
}

#[test]
fn test_media_box_matches_page_size() {
    let mut doc = OutputDocument::new();
    doc.add_page(612.0, 792.0);
    doc.insert_text("x", 1, 10.0, 10.0).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();

    let page_id = parsed.get_pages()[&1];
    let page = parsed.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();

    assert_eq!(media_box.len(), 4);
    assert_eq!(media_box[2].as_float().unwrap(), 612.0);
    assert_eq!(media_box[3].as_float().unwrap(), 792.0);
}

#[test]
fn test_text_operators_in_content_stream() {
    let mut doc = OutputDocument::new();
    doc.add_page(595.28, 841.89);
    doc.insert_text("Alice", 1, 100.0, 700.0).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let content = page_content(&parsed, 1);

    // "Alice" hex-encoded in WinAnsi
    assert!(content.contains("<416C696365> Tj"));
    assert!(content.contains("100 700 Td"));
    assert!(content.contains("/F1 12 Tf"));
}

#[test]
fn test_font_dictionary_uses_winansi() {
    let mut doc = OutputDocument::new();
    doc.add_page(595.28, 841.89);
    doc.set_font(FontFamily::Times, 14.0);
    doc.set_font_weight(FontWeight::Bold);
    doc.insert_text("Nome", 1, 50.0, 50.0).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();

    let page_id = parsed.get_pages()[&1];
    let page = parsed.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
    let font_ref = fonts.get(b"F1").unwrap().as_reference().unwrap();
    let font = parsed.get_dictionary(font_ref).unwrap();

    assert_eq!(font.get(b"BaseFont").unwrap().as_name().unwrap(), b"Times-Bold");
    assert_eq!(
        font.get(b"Encoding").unwrap().as_name().unwrap(),
        b"WinAnsiEncoding"
    );
}

#[test]
fn test_line_and_image_operators() {
    let mut doc = OutputDocument::new();
    doc.add_page(595.28, 841.89);
    doc.set_text_color(Color::rgb(1.0, 0.0, 0.0));
    doc.draw_line(1, 10.0, 20.0, 110.0, 20.0).unwrap();
    doc.insert_image(&minimal_jpeg(), 1, 0.0, 0.0, 595.28, 841.89)
        .unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let content = page_content(&parsed, 1);

    assert!(content.contains("1 0 0 RG"));
    assert!(content.contains("10 20 m"));
    assert!(content.contains("110 20 l"));
    assert!(content.contains("/Im1 Do"));

    let page_id = parsed.get_pages()[&1];
    let page = parsed.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    assert!(xobjects.has(b"Im1"));
}

#[test]
fn test_metadata_written_to_info_dictionary() {
    let mut doc = OutputDocument::new();
    doc.add_page(595.28, 841.89);
    doc.insert_text("x", 1, 10.0, 10.0).unwrap();
    doc.set_author("maria");
    doc.set_title("Contrato_Padrao.pdf");

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();

    let info_ref = parsed.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = parsed.get_dictionary(info_ref).unwrap();

    assert_eq!(
        info.get(b"Author").unwrap().as_str().unwrap(),
        b"maria"
    );
    assert_eq!(
        info.get(b"Title").unwrap().as_str().unwrap(),
        b"Contrato_Padrao.pdf"
    );
}

#[test]
fn test_accented_text_encodes_to_latin1() {
    let mut doc = OutputDocument::new();
    doc.add_page(595.28, 841.89);
    doc.insert_text("às", 1, 100.0, 100.0).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let content = page_content(&parsed, 1);

    // 'à' is 0xE0 in WinAnsi, 's' is 0x73
    assert!(content.contains("<E073> Tj"));
}
