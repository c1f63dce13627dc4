// src/gui/components/data_table.rs
//
// Draws the live table: header from the column map, one row per visible
// record. Purely a view; the filter lives in App::rebuild_view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{catalog::ColumnMap, gui::app::App};

/// Starting widths per column, NO first.
const PREFERRED_WIDTHS: [f32; 14] = [
    40.0, 260.0, 80.0, 80.0, 60.0, 50.0, 50.0, 80.0, 280.0, 160.0, 120.0, 110.0, 70.0, 90.0,
];

/// Text columns are left-aligned; the rest are counts and factors.
const TEXT_COLUMNS: [usize; 4] = [1, 8, 9, 10];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let columns = ColumnMap::catalog();
    let cols = columns.column_count();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("catalog_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            inner_table(ui, app, &columns, cols);
        });
}

fn inner_table(ui: &mut egui::Ui, app: &App, columns: &ColumnMap, cols: usize) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("catalog_table", app.source.as_deref().map(|p| p.to_string_lossy().into_owned())));

    for ci in 0..cols {
        let w = PREFERRED_WIDTHS.get(ci).copied().unwrap_or(80.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    let Some(catalog) = app.catalog.as_ref() else {
        // Nothing loaded yet: header only.
        table.header(24.0, |mut header| {
            for name in columns.names() {
                header.col(|ui| { ui.strong(*name); });
            }
        })
        .body(|_| {});
        return;
    };

    table
        .header(24.0, |mut header| {
            for (ci, name) in columns.names().iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = RichText::new(*name).strong();
                    if TEXT_COLUMNS.contains(&ci) {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(label); });
                    } else {
                        ui.centered_and_justified(|ui| { ui.label(label); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.row_ix.len(), |mut row| {
                let Some(&src_ix) = app.row_ix.get(row.index()) else { return };
                let Some(record) = catalog.get(src_ix) else { return };

                for ci in 0..cols {
                    // NO is the position in the full catalog, not in the filtered view.
                    let text = if ci == 0 {
                        (src_ix + 1).to_string()
                    } else {
                        s!(record.cell(columns, ci).unwrap_or(""))
                    };
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if TEXT_COLUMNS.contains(&ci) {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                        } else {
                            ui.centered_and_justified(|ui| { ui.label(text); });
                        }
                    });
                }
            });
        });
}
