// src/config/options.rs
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{CatalogError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub parse: ParseOptions,
    pub export: ExportOptions,
}

/* ---------------- Parsing ---------------- */

/// What to do with the last line of a catalog file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingLine {
    /// Process `lineCount - 1` lines; the last one is dropped unconditionally.
    #[default]
    DiscardLast,
    /// Keep every line, drop empty / whitespace-only ones.
    SkipBlank,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: String,
    pub trailing: TrailingLine,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: s!(DELIMITER),
            trailing: TrailingLine::default(),
        }
    }
}

impl ParseOptions {
    pub fn with_trailing(mut self, trailing: TrailingLine) -> Self {
        self.trailing = trailing;
        self
    }
}

/* ---------------- Rendering ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Link this stylesheet instead of inlining the built-in style.
    pub stylesheet: Option<String>,
}

/// Parameters of one catalog page. They pick the data file and the text
/// around the table; they never change how the file is parsed or rendered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    pub data_file: PathBuf,
    pub title: String,
    /// Trusted HTML fragment shown above the table.
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub acc: Option<String>,
    #[serde(default)]
    pub evt_type: Option<String>,
    #[serde(default)]
    pub gen_type: Option<String>,
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub det: Option<String>,
}

impl PageConfig {
    pub fn new(data_file: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            data_file: data_file.into(),
            title: title.into(),
            description: s!(),
            acc: None,
            evt_type: None,
            gen_type: None,
            campaign: None,
            det: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Heading above the table: the description, or the title when there is none.
    pub fn heading(&self) -> Heading<'_> {
        if self.description.trim().is_empty() {
            Heading::Title(&self.title)
        } else {
            Heading::Description(&self.description)
        }
    }

    /// Page location inside a site build:
    /// `<acc>/<evt_type>/[<gen_type>/]<campaign>/<det>/index.html`.
    /// Pages without any key fall back to a directory named after the title.
    pub fn output_rel_path(&self) -> PathBuf {
        let gen_type = self
            .gen_type
            .as_deref()
            .filter(|g| !g.eq_ignore_ascii_case(NO_GEN_TYPE));

        let keys = [
            self.acc.as_deref(),
            self.evt_type.as_deref(),
            gen_type,
            self.campaign.as_deref(),
            self.det.as_deref(),
        ];

        let mut rel = PathBuf::new();
        for key in keys.into_iter().flatten() {
            let key = key.trim();
            if !key.is_empty() {
                rel.push(crate::file::sanitize_stem(key, "page"));
            }
        }
        if rel.as_os_str().is_empty() {
            rel.push(crate::file::sanitize_stem(&self.title, "page"));
        }
        rel.push(DEFAULT_PAGE_FILE);
        rel
    }
}

/// Where a page heading comes from. Descriptions are markup, titles are text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading<'a> {
    Description(&'a str),
    Title(&'a str),
}

/* ---------------- Site manifest ---------------- */

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteManifest {
    /// Root that relative `data_file` paths resolve against.
    #[serde(default)]
    pub base_path: PathBuf,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    #[serde(default)]
    pub stylesheet: Option<String>,
    #[serde(default)]
    pub trailing_line: TrailingLine,
    pub pages: Vec<PageConfig>,
}

impl SiteManifest {
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Read a manifest file. A relative `base_path` is taken relative to the
    /// directory holding the manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::FileUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::from_json_str(&text).map_err(|source| CatalogError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

        if manifest.base_path.is_relative() {
            if let Some(dir) = path.parent() {
                manifest.base_path = dir.join(&manifest.base_path);
            }
        }
        logd!(
            "Manifest: {} ({} pages, base={})",
            path.display(),
            manifest.pages.len(),
            manifest.base_path.display()
        );
        Ok(manifest)
    }

    pub fn data_path(&self, page: &PageConfig) -> PathBuf {
        if page.data_file.is_absolute() {
            page.data_file.clone()
        } else {
            self.base_path.join(&page.data_file)
        }
    }

    pub fn page_out_path(&self, page: &PageConfig) -> PathBuf {
        self.out_dir.join(page.output_rel_path())
    }

    /// Fails on the first pair of pages sharing an output file.
    pub fn check_output_paths(&self) -> Result<()> {
        let mut seen: HashMap<PathBuf, &str> = HashMap::with_capacity(self.pages.len());
        for page in &self.pages {
            let path = self.page_out_path(page);
            if let Some(first) = seen.get(&path) {
                return Err(CatalogError::OutputCollision {
                    path,
                    first: s!(*first),
                    second: page.title.clone(),
                });
            }
            seen.insert(path, &page.title);
        }
        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_trailing(self.trailing_line)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { stylesheet: self.stylesheet.clone() }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// Prepend the synthesized `NO` column.
    pub row_numbers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            row_numbers: false,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, extension following the current format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(&*stem, ".", self.format.ext()))
    }

    /// Parse GUI/CLI text into dir + stem. Ignores a pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_EXPORT_STEM),
        }
    }
}
