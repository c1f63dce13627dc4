// src/cli.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{Catalog, CatalogView};
use crate::config::consts::{DEFAULT_EXPORT_STEM, DEFAULT_PAGE_FILE};
use crate::config::options::{
    ExportFormat, ExportOptions, PageConfig, ParseOptions, RenderOptions, SiteManifest, TrailingLine,
};
use crate::csv;
use crate::error::Result;
use crate::file;
use crate::progress::Progress;
use crate::site;

#[derive(Parser, Debug)]
#[command(name = "fcc_catalog", author, version, about = "Dataset catalog pages (CLI)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one catalog file as a searchable HTML page
    Render {
        /// `,,`-delimited catalog file
        data: PathBuf,
        /// Page title (defaults to the file stem)
        #[arg(long)]
        title: Option<String>,
        /// Heading above the table (HTML allowed)
        #[arg(long, default_value = "")]
        description: String,
        /// Link this stylesheet instead of inlining the default style
        #[arg(long)]
        stylesheet: Option<String>,
        /// Output file or directory; stdout when omitted
        #[arg(short, long)]
        out: Option<String>,
        /// Drop blank lines instead of discarding the last line
        #[arg(long)]
        skip_blank: bool,
    },

    /// Render every page listed in a site manifest (JSON)
    Site {
        manifest: PathBuf,
        /// Override the manifest's output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Export a catalog as CSV/TSV
    Export {
        data: PathBuf,
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,
        /// Leave out the header line
        #[arg(long)]
        no_headers: bool,
        /// Prepend the NO column
        #[arg(long)]
        row_numbers: bool,
        /// Output file or directory; stdout when omitted
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long)]
        skip_blank: bool,
    },

    /// Print rows whose text contains QUERY (case-insensitive) as TSV
    Search {
        data: PathBuf,
        query: String,
        #[arg(long)]
        skip_blank: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

fn parse_options(skip_blank: bool) -> ParseOptions {
    let trailing = if skip_blank { TrailingLine::SkipBlank } else { TrailingLine::DiscardLast };
    ParseOptions::default().with_trailing(trailing)
}

/// Prints site build progress on stderr.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn missing_data(&mut self, title: &str, data: &Path) {
        eprintln!("warning: '{}': {} unavailable, writing an empty table", title, data.display());
    }
    fn page_written(&mut self, title: &str, path: &Path) {
        self.done += 1;
        eprintln!("[{}/{}] {} -> {}", self.done, self.total, title, path.display());
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run a command, writing its output (pages, exports, rows, summaries) to `out`.
pub fn run_to<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Render { data, title, description, stylesheet, out: out_path, skip_blank } => {
            let title = title.unwrap_or_else(|| default_title(&data));
            let page = PageConfig::new(&data, title).with_description(description);
            let render = RenderOptions { stylesheet };
            let outcome = site::render_one(&page, &data, &parse_options(skip_blank), &render);
            if !outcome.data_available {
                eprintln!("warning: {} unavailable, rendered an empty table", data.display());
            }
            match out_path {
                Some(o) => {
                    let path = file::resolve_single_out_path(&o, DEFAULT_PAGE_FILE)?;
                    file::write_page(&path, &outcome.html)?;
                    writeln!(out, "Wrote {} ({} rows)", path.display(), outcome.rows)?;
                }
                None => out.write_all(outcome.html.as_bytes())?,
            }
            Ok(())
        }

        Commands::Site { manifest, out: out_dir } => {
            let mut manifest = SiteManifest::load(&manifest)?;
            if let Some(dir) = out_dir {
                manifest.out_dir = dir;
            }
            let mut progress = CliProgress { done: 0, total: 0 };
            let summary = site::build(&manifest, &mut progress)?;
            writeln!(
                out,
                "Wrote {} pages into {} ({} with missing data)",
                summary.pages_written.len(),
                manifest.out_dir.display(),
                summary.unavailable.len()
            )?;
            Ok(())
        }

        Commands::Export { data, format, no_headers, row_numbers, out: out_path, skip_blank } => {
            let catalog = Catalog::load(&data, &parse_options(skip_blank))?;
            let mut export = ExportOptions::default();
            export.format = format.into();
            export.include_headers = !no_headers;
            export.row_numbers = row_numbers;

            let view = CatalogView::all(&catalog);
            match out_path {
                Some(o) => {
                    let default_name = join!(DEFAULT_EXPORT_STEM, ".", export.format.ext());
                    let path = file::resolve_single_out_path(&o, &default_name)?;
                    file::write_export_to(&path, &export, &view)?;
                    writeln!(out, "Wrote {} ({} rows)", path.display(), view.len())?;
                }
                None => out.write_all(csv::view_to_export_string(&view, &export).as_bytes())?,
            }
            Ok(())
        }

        Commands::Search { data, query, skip_blank } => {
            let catalog = Catalog::load(&data, &parse_options(skip_blank))?;
            let view = CatalogView::filtered(&catalog, &query);
            logf!("Search: '{}' -> {}/{} rows", query, view.len(), catalog.len());

            for (no, record) in view.rows() {
                csv::write_row(&mut *out, &csv::export_row(no, record, true), '\t')?;
            }
            Ok(())
        }
    }
}

fn default_title(data: &Path) -> String {
    data.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!("Catalog"))
}
