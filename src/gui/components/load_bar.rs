// src/gui/components/load_bar.rs
//
// Manifest / data file pickers and the trailing-line toggle.

use std::path::PathBuf;

use eframe::egui;
use crate::{config::options::TrailingLine, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::Grid::new("load_bar").num_columns(3).show(ui, |ui| {
        ui.label("Manifest:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.manifest_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            let path = PathBuf::from(app.state.gui.manifest_path_text.trim());
            logf!("UI: Load manifest {}", path.display());
            app.load_manifest(&path);
        }
        ui.end_row();

        ui.label("Data file:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.data_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Open").clicked() || enter {
            let path = PathBuf::from(app.state.gui.data_path_text.trim());
            logf!("UI: Open data file {}", path.display());
            // A file opened by hand is not one of the manifest's tabs.
            app.state.gui.current_page_index = None;
            app.load_data(&path);
        }
        ui.end_row();
    });

    let mut skip_blank = app.state.options.parse.trailing == TrailingLine::SkipBlank;
    if ui
        .checkbox(&mut skip_blank, "Skip blank lines (keep the last line)")
        .changed()
    {
        app.state.options.parse.trailing =
            if skip_blank { TrailingLine::SkipBlank } else { TrailingLine::DiscardLast };
        logf!("UI: Trailing line policy → {:?}", app.state.options.parse.trailing);
        app.reload();
    }
}
