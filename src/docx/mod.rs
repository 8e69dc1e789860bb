//! Table reader for .docx documents.

mod tables;

pub use tables::{Table, parse_tables};

use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// The body-level tables of a Word document, in document order.
#[derive(Debug, Clone)]
pub struct DocxDocument {
    tables: Vec<Table>,
}

impl DocxDocument {
    pub fn open(path: &Path) -> AppResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
            .map_err(|e| match e {
                AppError::Document(msg) => AppError::Document(format!("{}: {msg}", path.display())),
                other => other,
            })
    }

    pub fn from_bytes(bytes: &[u8]) -> AppResult<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    fn from_reader<R: Read + Seek>(reader: R) -> AppResult<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut entry = archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| AppError::Document(format!("{DOCUMENT_PART} not found")))?;

        let mut xml = Vec::new();
        entry.read_to_end(&mut xml)?;

        Ok(Self {
            tables: parse_tables(&xml)?,
        })
    }

    /// Table at zero-based `index`, or `None` if the document has fewer tables.
    pub fn table(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}
