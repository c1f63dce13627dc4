// src/catalog/view.rs
//
// Zero-copy filtered view over a Catalog: a list of row indexes.
// Row numbers stay the record's position in the full catalog, the same
// way the page script only hides rows instead of renumbering them.

use crate::render::search;

use super::{Catalog, Record};

#[derive(Clone, Debug)]
pub struct CatalogView<'a> {
    /// Positions of kept rows in the catalog
    pub row_ix: Vec<usize>,
    catalog: &'a Catalog,
}

impl<'a> CatalogView<'a> {
    pub fn all(catalog: &'a Catalog) -> Self {
        Self { row_ix: (0..catalog.len()).collect(), catalog }
    }

    /// Rows whose rendered text contains `query` (case-insensitive).
    /// An empty query keeps every row.
    pub fn filtered(catalog: &'a Catalog, query: &str) -> Self {
        Self { row_ix: filter_indices(catalog, query), catalog }
    }

    /// Build a view directly from precomputed indices.
    pub fn from_indices(catalog: &'a Catalog, mut row_ix: Vec<usize>) -> Self {
        row_ix.retain(|&ix| ix < catalog.len());
        Self { row_ix, catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Row `i` of the view with its 1-based catalog row number.
    pub fn row(&self, i: usize) -> Option<(usize, &'a Record)> {
        let ix = *self.row_ix.get(i)?;
        self.catalog.get(ix).map(|r| (ix + 1, r))
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a Record)> + '_ {
        self.row_ix
            .iter()
            .filter_map(|&ix| self.catalog.get(ix).map(|r| (ix + 1, r)))
    }
}

/// Indexes of catalog rows matching `query`.
pub fn filter_indices(catalog: &Catalog, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..catalog.len()).collect();
    }
    let needle = search::normalize_query(query);
    catalog
        .numbered()
        .filter(|(no, r)| search::matches_normalized(&search::row_text(*no, r), &needle))
        .map(|(no, _)| no - 1)
        .collect()
}
