// src/catalog/mod.rs
//! Dataset catalogs: one [`Record`] per line of a campaign's text file.
//!
//! A catalog is built fresh from its backing file each time a page is
//! rendered and is never mutated afterwards. Every field is opaque text;
//! nothing here parses numbers.

use std::fs;
use std::path::Path;

use crate::config::consts::FIELD_COUNT;
use crate::config::options::ParseOptions;
use crate::error::{CatalogError, Result};

pub mod columns;
pub mod parse;
pub mod view;

pub use columns::ColumnMap;
pub use view::CatalogView;

/// One catalog row: up to 13 fields in file order (`Name` .. `Matching eff`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Fields past the 13th are dropped.
    pub fn new(mut fields: Vec<String>) -> Self {
        fields.truncate(FIELD_COUNT);
        Self { fields }
    }

    pub fn from_line(line: &str, delimiter: &str) -> Self {
        if delimiter.is_empty() {
            return Self::new(vec![s!(line)]);
        }
        let fields = line.split(delimiter).take(FIELD_COUNT).map(String::from).collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Parsed field by 0-based index; `None` when the line was short.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Value shown in table column `column` (the row-number column has none).
    pub fn cell(&self, columns: &ColumnMap, column: usize) -> Option<&str> {
        columns.field_for_column(column).and_then(|ix| self.field(ix))
    }

    pub fn name(&self) -> Option<&str> {
        self.field(0)
    }

    /// How many of the 13 fields the source line did not provide.
    pub fn missing_fields(&self) -> usize {
        FIELD_COUNT.saturating_sub(self.fields.len())
    }
}

/// Ordered records of one campaign / detector configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn parse(text: &str, opts: &ParseOptions) -> Self {
        parse::parse_catalog(text, opts)
    }

    /// Read and parse a catalog file. Bytes that aren't UTF-8 are replaced
    /// rather than failing the page.
    pub fn load(path: &Path, opts: &ParseOptions) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| CatalogError::FileUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let catalog = Self::parse(&text, opts);
        logf!("Catalog: Loaded {} (rows={})", path.display(), catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Records paired with their 1-based row number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.records.iter().enumerate().map(|(ix, r)| (ix + 1, r))
    }
}
