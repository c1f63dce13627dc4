// src/gui/components/search_bar.rs
//
// Search box: every edit refilters the table (same rule as the page script).

use eframe::egui;
use crate::{config::consts::SEARCH_PLACEHOLDER, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let edit = egui::TextEdit::singleline(&mut app.state.gui.search)
            .hint_text(SEARCH_PLACEHOLDER)
            .desired_width(320.0);
        let mut changed = ui.add(edit).changed();

        if ui.button("Clear").clicked() && !app.state.gui.search.is_empty() {
            app.state.gui.search.clear();
            changed = true;
        }

        if changed {
            app.rebuild_view();
            logd!("UI: Search '{}' → {} rows", app.state.gui.search, app.row_ix.len());
        }
    });
}
