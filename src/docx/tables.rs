//! Streaming extraction of body-level tables from `word/document.xml`.

use crate::errors::AppResult;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Upper bound for `w:gridSpan`. Word itself stops at 63 columns.
const MAX_GRID_SPAN: usize = 512;

/// A table as rows of cell text.
pub type Table = Vec<Vec<String>>;

/// Parse every top-level table of a WordprocessingML body.
///
/// Each row holds one entry per grid column: a cell spanning `n` columns
/// (`w:gridSpan`) is repeated `n` times, and a vertically merged
/// continuation cell (`w:vMerge`) repeats the text of the cell above it.
/// Tables nested inside cells are skipped, as is their text.
pub fn parse_tables(xml: &[u8]) -> AppResult<Vec<Table>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut collector = TableCollector::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => collector.start(&e)?,
            Event::Empty(e) => {
                // <w:p/> opens and closes an empty paragraph at once
                collector.start(&e)?;
                collector.end(e.name().as_ref());
            }
            Event::End(e) => collector.end(e.name().as_ref()),
            Event::Text(t) => {
                if collector.in_text() {
                    collector.push_text(&t.unescape()?);
                }
            }
            Event::CData(t) => {
                if collector.in_text() {
                    collector.push_text(&String::from_utf8_lossy(&t));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(collector.tables)
}

#[derive(Default)]
struct CellState {
    paragraphs: Vec<String>,
    paragraph: Option<String>,
    span: usize,
    continues_above: bool,
}

#[derive(Default)]
struct TableCollector {
    tables: Vec<Table>,
    depth: usize,
    table: Table,
    row: Option<Vec<String>>,
    cell: Option<CellState>,
    in_run: bool,
    in_t: bool,
}

impl TableCollector {
    fn in_text(&self) -> bool {
        self.depth == 1 && self.in_t && self.paragraph().is_some()
    }

    fn paragraph(&self) -> Option<&String> {
        self.cell.as_ref()?.paragraph.as_ref()
    }

    fn push_text(&mut self, text: &str) {
        if let Some(p) = self.cell.as_mut().and_then(|c| c.paragraph.as_mut()) {
            p.push_str(text);
        }
    }

    fn start(&mut self, e: &BytesStart) -> AppResult<()> {
        let name = e.name();
        let name = name.as_ref();

        if name == b"w:tbl" {
            self.depth += 1;
            if self.depth == 1 {
                self.table = Vec::new();
            }
            return Ok(());
        }

        if self.depth != 1 {
            return Ok(());
        }

        match name {
            b"w:tr" => self.row = Some(Vec::new()),
            b"w:tc" => {
                self.cell = Some(CellState {
                    span: 1,
                    ..CellState::default()
                })
            }
            b"w:p" => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.paragraph = Some(String::new());
                }
            }
            b"w:r" => self.in_run = true,
            b"w:t" => self.in_t = true,
            b"w:tab" if self.in_run => self.push_text("\t"),
            b"w:br" | b"w:cr" if self.in_run => self.push_text("\n"),
            b"w:gridSpan" => {
                let span = val_attr(e)?
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or(1)
                    .clamp(1, MAX_GRID_SPAN);
                if let Some(cell) = self.cell.as_mut() {
                    cell.span = span;
                }
            }
            b"w:vMerge" => {
                // no value means "continue"
                let restart = val_attr(e)?.is_some_and(|v| v == "restart");
                if let Some(cell) = self.cell.as_mut() {
                    cell.continues_above = !restart;
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn end(&mut self, name: &[u8]) {
        if name == b"w:tbl" {
            if self.depth == 1 {
                self.tables.push(std::mem::take(&mut self.table));
            }
            self.depth = self.depth.saturating_sub(1);
            return;
        }

        if self.depth != 1 {
            return;
        }

        match name {
            b"w:t" => self.in_t = false,
            b"w:r" => self.in_run = false,
            b"w:p" => {
                if let Some(cell) = self.cell.as_mut()
                    && let Some(p) = cell.paragraph.take()
                {
                    cell.paragraphs.push(p);
                }
            }
            b"w:tc" => self.close_cell(),
            b"w:tr" => {
                if let Some(row) = self.row.take() {
                    self.table.push(row);
                }
            }
            _ => {}
        }
    }

    fn close_cell(&mut self) {
        let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) else {
            return;
        };

        let start = row.len();
        for offset in 0..cell.span {
            let text = if cell.continues_above {
                self.table
                    .last()
                    .and_then(|above| above.get(start + offset))
                    .cloned()
                    .unwrap_or_default()
            } else {
                cell.paragraphs.join("\n")
            };
            row.push(text);
        }
    }
}

fn val_attr(e: &BytesStart) -> AppResult<Option<String>> {
    match e.try_get_attribute("w:val")? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}
