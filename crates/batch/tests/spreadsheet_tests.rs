use batch::{read_headers, RawValue, SheetData};
use rust_xlsxwriter::Workbook;
use std::path::Path;

fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    // A banner row above the real headers
    sheet.write_string(0, 0, "Relatório de clientes").unwrap();

    sheet.write_string(1, 0, "Nome").unwrap();
    sheet.write_string(1, 2, "Valor").unwrap(); // column 1 left blank

    sheet.write_string(2, 0, "Alice").unwrap();
    sheet.write_number(2, 2, 1234.5).unwrap();

    sheet.write_string(3, 0, "Bob").unwrap();
    sheet.write_number(3, 2, 99.0).unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_read_with_offset_header_row() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("clientes.xlsx");
    write_fixture(&path);

    let sheet = SheetData::read(&path, 1).unwrap();

    assert_eq!(sheet.headers()[0], "Nome");
    assert_eq!(sheet.headers()[2], "Valor");
    assert_eq!(sheet.row_count(), 2);

    let first = &sheet.rows()[0];
    assert_eq!(sheet.value(first, "Nome", 0), RawValue::Text("Alice".to_string()));
    assert_eq!(sheet.value(first, "Valor", 2), RawValue::Number(1234.5));
}

#[test]
fn test_positional_fallback_when_header_missing() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("clientes.xlsx");
    write_fixture(&path);

    let sheet = SheetData::read(&path, 1).unwrap();
    let first = &sheet.rows()[0];

    // Renamed header in the profile, index still points at the right column
    assert_eq!(
        sheet.value(first, "Cliente", 0),
        RawValue::Text("Alice".to_string())
    );
    // Fallback landing outside the row yields Empty
    assert_eq!(sheet.value(first, "Inexistente", 99), RawValue::Empty);
}

#[test]
fn test_read_headers_names_blank_columns() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("clientes.xlsx");
    write_fixture(&path);

    let headers = read_headers(&path, 1).unwrap();
    assert_eq!(headers, vec!["Nome", "Coluna 2", "Valor"]);
}

#[test]
fn test_header_row_past_end_fails() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("clientes.xlsx");
    write_fixture(&path);

    assert!(SheetData::read(&path, 50).is_err());
    assert!(read_headers(&path, 50).is_err());
}
