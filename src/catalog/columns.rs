// src/catalog/columns.rs
//
// Column layout of a catalog table. The file carries 13 fields per line;
// the table shows 14 columns because column 0 (`NO`) is the synthesized
// row number. Field `i` therefore lands in column `i + 1`.

use crate::config::consts::{COLUMN_NAMES, FIELD_COUNT};

/// Index of the synthesized row-number column.
pub const ROW_NUMBER_COLUMN: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    names: &'static [&'static str],
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::catalog()
    }
}

impl ColumnMap {
    /// The fixed 14-column layout of dataset catalogs.
    pub const fn catalog() -> Self {
        Self { names: &COLUMN_NAMES }
    }

    /// All column names in display order, `NO` first.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    /// Number of columns populated from the file.
    pub fn field_count(&self) -> usize {
        self.names.len().saturating_sub(1)
    }

    /// Column that parsed field `field` is shown in.
    pub fn column_for_field(&self, field: usize) -> Option<usize> {
        (field < self.field_count()).then_some(field + 1)
    }

    /// Parsed field shown in `column`; `None` for the row-number column.
    pub fn field_for_column(&self, column: usize) -> Option<usize> {
        if column == ROW_NUMBER_COLUMN || column >= self.column_count() {
            None
        } else {
            Some(column - 1)
        }
    }

    pub fn name(&self, column: usize) -> Option<&'static str> {
        self.names.get(column).copied()
    }

    /// Column index by name (ASCII case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }

    /// Names of the file-backed columns only (`Name` .. `Matching eff`).
    pub fn field_names(&self) -> &'static [&'static str] {
        &self.names[1..]
    }
}

const _: () = assert!(COLUMN_NAMES.len() == FIELD_COUNT + 1);
