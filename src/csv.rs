// src/csv.rs
//
// CSV/TSV export of catalog rows. Quoting follows the usual rules: a cell
// is quoted when it holds the separator, a quote, or a line break.

use std::io::{self, Write};

use crate::catalog::{Catalog, CatalogView, ColumnMap, Record};
use crate::config::consts::FIELD_COUNT;
use crate::config::options::ExportOptions;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Row shaping ---------------- */

pub fn header_row(columns: &ColumnMap, row_numbers: bool) -> Vec<String> {
    let names = if row_numbers { columns.names() } else { columns.field_names() };
    names.iter().map(|n| s!(*n)).collect()
}

/// Full-width output row: short records are padded with empty cells.
pub fn export_row(row_number: usize, record: &Record, row_numbers: bool) -> Vec<String> {
    let mut out = Vec::with_capacity(FIELD_COUNT + 1);
    if row_numbers {
        out.push(row_number.to_string());
    }
    for ix in 0..FIELD_COUNT {
        out.push(s!(record.field(ix).unwrap_or("")));
    }
    out
}

/* ---------------- Whole exports ---------------- */

/// Export string for the rows of `view` (Copy / Export).
pub fn view_to_export_string(view: &CatalogView<'_>, opts: &ExportOptions) -> String {
    let sep = opts.delim();
    let mut buf: Vec<u8> = Vec::new();

    if opts.include_headers {
        let _ = write_row(&mut buf, &header_row(&ColumnMap::catalog(), opts.row_numbers), sep);
    }
    for (no, record) in view.rows() {
        let _ = write_row(&mut buf, &export_row(no, record, opts.row_numbers), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

pub fn catalog_to_export_string(catalog: &Catalog, opts: &ExportOptions) -> String {
    view_to_export_string(&CatalogView::all(catalog), opts)
}
