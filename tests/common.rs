#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use zip::ZipArchive;
use zip::write::SimpleFileOptions;

pub fn shs() -> Command {
    cargo_bin_cmd!("shiftsheet")
}

/// Create an empty, unique working directory inside the system temp dir
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("shiftsheet_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Build a table row from string literals
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

pub fn header_row() -> Vec<String> {
    row(&["ФИО", "Должность", "Дата", "Часы", "Время", "Задача"])
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub fn cell_xml(text: &str) -> String {
    format!(
        r#"<w:tc><w:tcPr><w:tcW w:w="1000" w:type="dxa"/></w:tcPr><w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p></w:tc>"#,
        escape(text)
    )
}

pub fn table_xml(rows: &[Vec<String>]) -> String {
    let mut xml = String::from("<w:tbl><w:tblPr/>");
    for r in rows {
        xml.push_str("<w:tr>");
        for c in r {
            xml.push_str(&cell_xml(c));
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    xml
}

pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

/// Zip a minimal .docx package around `document_xml`
pub fn docx_bytes(document_xml: &str) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#,
    )
    .unwrap();

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document_xml.as_bytes()).unwrap();

    zip.finish().unwrap().into_inner()
}

/// Write a .docx whose body holds a paragraph followed by `tables`
pub fn write_docx(path: &Path, tables: &[Vec<Vec<String>>]) {
    let mut body = String::from("<w:p><w:r><w:t>Служебная записка</w:t></w:r></w:p>");
    for t in tables {
        body.push_str(&table_xml(t));
        body.push_str("<w:p/>");
    }
    fs::write(path, docx_bytes(&document_xml(&body))).expect("write docx");
}

/// The usual layout: a title table at index 0 and the shift table at index 1
pub fn write_shift_docx(path: &Path, shifts: &[Vec<String>]) {
    let title = vec![row(&["Отдел", "Разработка"])];
    let mut table = vec![header_row()];
    table.extend(shifts.iter().cloned());
    write_docx(path, &[title, table]);
}

/// Read a part of a zip package (xlsx) as text
pub fn read_part(path: &Path, part: &str) -> String {
    let file = fs::File::open(path).expect("open xlsx");
    let mut archive = ZipArchive::new(file).expect("xlsx is a zip");
    let mut entry = archive.by_name(part).expect("part exists");
    let mut s = String::new();
    entry.read_to_string(&mut s).expect("read part");
    s
}
