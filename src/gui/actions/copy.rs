// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    if app.catalog.is_none() {
        app.status("Nothing to copy (no catalog loaded)");
        logd!("Copy: Clicked, but there's no catalog");
        return;
    }

    let txt = {
        let Some(view) = super::current_view(app) else { return };
        logf!(
            "Copy: rows={}, headers={}",
            view.len(),
            app.state.options.export.include_headers
        );
        csv::view_to_export_string(&view, &app.state.options.export)
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
