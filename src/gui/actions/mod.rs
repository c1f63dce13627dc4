// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs

pub use copy::copy;
pub use export::export;

use crate::{catalog::CatalogView, gui::app::App};

/// Visible rows of the current catalog, in table order.
#[inline]
pub(super) fn current_view(app: &App) -> Option<CatalogView<'_>> {
    app.catalog
        .as_ref()
        .map(|c| CatalogView::from_indices(c, app.row_ix.clone()))
}
