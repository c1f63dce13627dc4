// src/gui/components/tabs.rs
//
// One tab per manifest page; switching loads that page's data file.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.pages().is_empty() {
        return;
    }

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        let cur = app.state.gui.current_page_index;

        for (idx, page) in app.pages().iter().enumerate() {
            let selected = cur == Some(idx);
            if ui.selectable_label(selected, page.title.as_str()).clicked() && !selected {
                clicked = Some(idx);
            }
        }
    });

    if let Some(idx) = clicked {
        logf!("UI: Tab switch {:?} → {}", app.state.gui.current_page_index, idx);
        app.open_page(idx);
    }

    if !app.heading.is_empty() {
        ui.label(egui::RichText::new(app.heading.as_str()).heading());
    }
}
