// src/site.rs
//
// Site build: render every page listed in a manifest into
// `<out_dir>/<acc>/<evt_type>/<campaign>/<det>/index.html`.
// A page whose data file is missing is still written (empty table plus a
// notice). Pages sharing an output file stop the build before anything is
// written, as do failures writing the output.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::config::options::{PageConfig, ParseOptions, RenderOptions, SiteManifest};
use crate::error::Result;
use crate::file;
use crate::progress::Progress;
use crate::render::render_page;

#[derive(Clone, Debug, Default)]
pub struct BuildSummary {
    pub pages_written: Vec<PathBuf>,
    /// Data files that could not be read; their pages have empty tables.
    pub unavailable: Vec<PathBuf>,
}

/// Result of rendering one page.
#[derive(Clone, Debug)]
pub struct PageOutcome {
    pub html: String,
    pub rows: usize,
    pub data_available: bool,
}

/// Load `data_path` and render the page around it.
pub fn render_one(
    page: &PageConfig,
    data_path: &Path,
    parse: &ParseOptions,
    render: &RenderOptions,
) -> PageOutcome {
    let catalog = Catalog::load(data_path, parse);
    let rows = catalog.as_ref().map(Catalog::len).unwrap_or(0);
    let data_available = catalog.is_ok();
    let html = render_page(page, &catalog, render);
    PageOutcome { html, rows, data_available }
}

pub fn build(manifest: &SiteManifest, progress: &mut dyn Progress) -> Result<BuildSummary> {
    let parse = manifest.parse_options();
    let render = manifest.render_options();
    let mut summary = BuildSummary::default();

    logf!(
        "Site: Building {} pages into {}",
        manifest.pages.len(),
        manifest.out_dir.display()
    );
    if let Err(e) = manifest.check_output_paths() {
        loge!("Site: {}", e);
        return Err(e);
    }
    progress.begin(manifest.pages.len());

    for page in &manifest.pages {
        let data_path = manifest.data_path(page);
        let out_path = manifest.page_out_path(page);

        let outcome = render_one(page, &data_path, &parse, &render);
        if !outcome.data_available {
            progress.missing_data(&page.title, &data_path);
            summary.unavailable.push(data_path);
        }

        let written = match file::write_page(&out_path, &outcome.html) {
            Ok(p) => p,
            Err(e) => {
                loge!("Site: Failed writing {} ({})", out_path.display(), e);
                progress.finish();
                return Err(e);
            }
        };
        logd!("Site: '{}' rows={} -> {}", page.title, outcome.rows, written.display());
        progress.page_written(&page.title, &written);
        summary.pages_written.push(written);
    }

    progress.finish();
    logf!(
        "Site: Done (pages={}, unavailable={})",
        summary.pages_written.len(),
        summary.unavailable.len()
    );
    Ok(summary)
}
