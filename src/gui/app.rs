// src/gui/app.rs
use std::{error::Error, path::{Path, PathBuf}};

use eframe::egui;

use crate::{
    catalog::{Catalog, view::filter_indices},
    config::{
        options::{Heading, PageConfig, SiteManifest},
        state::AppState,
    },
    render::html::to_plain_text,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Dataset Catalogs",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // optional site manifest; its pages become tabs
    pub manifest: Option<SiteManifest>,

    // catalog currently shown, and where it came from
    pub catalog: Option<Catalog>,
    pub source: Option<PathBuf>,
    pub heading: String,

    // rows of `catalog` matching the search box
    pub row_ix: Vec<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            manifest: None,
            catalog: None,
            source: None,
            heading: s!(),
            row_ix: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
        };

        // Pick up a manifest next to the working directory, if any.
        let manifest_path = PathBuf::from(&app.state.gui.manifest_path_text);
        if manifest_path.is_file() {
            app.load_manifest(&manifest_path);
        }

        logf!(
            "Init: manifest={}, pages={}",
            manifest_path.display(),
            app.manifest.as_ref().map(|m| m.pages.len()).unwrap_or(0)
        );
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn pages(&self) -> &[PageConfig] {
        self.manifest.as_ref().map(|m| m.pages.as_slice()).unwrap_or(&[])
    }

    /* ---------- loading ---------- */

    pub fn load_manifest(&mut self, path: &Path) {
        match SiteManifest::load(path) {
            Ok(m) => {
                let n = m.pages.len();
                self.state.options.parse = m.parse_options();
                self.manifest = Some(m);
                self.status(format!("Loaded manifest ({} pages)", n));
                if n > 0 {
                    self.open_page(0);
                }
            }
            Err(e) => {
                loge!("Manifest: {}", e);
                self.status(format!("Manifest error: {e}"));
            }
        }
    }

    /// Switch to manifest page `idx` and load its data file.
    pub fn open_page(&mut self, idx: usize) {
        let Some(manifest) = self.manifest.as_ref() else { return };
        let Some(page) = manifest.pages.get(idx) else { return };

        let data_path = manifest.data_path(page);
        let heading = match page.heading() {
            Heading::Description(html) => to_plain_text(html),
            Heading::Title(text) => s!(text),
        };

        self.state.gui.current_page_index = Some(idx);
        self.state.gui.data_path_text = data_path.to_string_lossy().into_owned();
        self.load_data(&data_path);
        self.heading = heading;
    }

    /// Load a catalog file directly (no manifest page).
    pub fn load_data(&mut self, path: &Path) {
        self.source = Some(path.to_path_buf());
        self.heading = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        match Catalog::load(path, &self.state.options.parse) {
            Ok(c) => {
                let n = c.len();
                self.catalog = Some(c);
                self.status(format!("Loaded {} rows from {}", n, path.display()));
            }
            Err(e) => {
                loge!("Load: {}", e);
                // Keep the table (headers only) instead of dropping the view.
                self.catalog = Some(Catalog::default());
                self.status(format!("{e}"));
            }
        }
        self.rebuild_view();
    }

    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.load_data(&path);
        }
    }

    /// Reapply the search box to the current catalog.
    pub fn rebuild_view(&mut self) {
        self.row_ix = match &self.catalog {
            Some(c) => filter_indices(c, &self.state.gui.search),
            None => Vec::new(),
        };
    }

    pub fn total_rows(&self) -> usize {
        self.catalog.as_ref().map(Catalog::len).unwrap_or(0)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} / {} rows", self.row_ix.len(), self.total_rows()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::load_bar::draw(ui, self);

            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::search_bar::draw(ui, self);

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
