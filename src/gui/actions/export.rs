// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    }

    let status_msg = if app.row_ix.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        s!("Nothing to export")
    } else if app.catalog.is_none() {
        logd!("Export: Clicked, but there's no catalog");
        s!("Nothing to export (no catalog loaded)")
    } else {
        // keep all borrows immutable inside this block
        let Some(view) = super::current_view(app) else { return };
        let result = file::write_export(&app.state.options.export, &view).map(|p| (p, view.len()));

        match result {
            Ok((path, rows)) => format!("Exported {} rows to {}", rows, path.display()),
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        }
    };

    app.status(status_msg);
}
