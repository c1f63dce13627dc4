// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::CatalogView;
use crate::config::options::ExportOptions;
use crate::csv::view_to_export_string;
use crate::error::{CatalogError, Result};

/// Write a rendered page, creating parent directories. Returns the path.
pub fn write_page(path: &Path, html: &str) -> Result<PathBuf> {
    ensure_parent(path)?;
    fs::write(path, html)?;
    logd!("File: Wrote page {} ({} bytes)", path.display(), html.len());
    Ok(path.to_path_buf())
}

/// Write the rows of `view` to `export.out_path()`.
pub fn write_export(export: &ExportOptions, view: &CatalogView<'_>) -> Result<PathBuf> {
    let path = export.out_path();
    write_export_to(&path, export, view)
}

/// Write the rows of `view` to an explicit path (user-chosen extension kept).
pub fn write_export_to(path: &Path, export: &ExportOptions, view: &CatalogView<'_>) -> Result<PathBuf> {
    ensure_parent(path)?;
    let contents = view_to_export_string(view, export);
    fs::write(path, contents)?;
    logf!("Export: {} rows -> {}", view.len(), path.display());
    Ok(path.to_path_buf())
}

/// `-o` handling: empty -> default file name; trailing separator or an
/// existing directory -> default file name inside it; otherwise the path.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Directory/file-name-safe form of a page key or title: ASCII alphanumerics,
/// `-`, `_` and `.` survive, whitespace runs become one `_`.
pub fn sanitize_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '.' { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
