// src/render/html.rs
use std::borrow::Cow;

use crate::catalog::{Catalog, ColumnMap};
use crate::config::consts::TABLE_ID;

/// Escape text for element content and double-quoted attributes.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// `<thead>` with one `<th>` per column name, in column order.
pub fn render_head(columns: &ColumnMap) -> String {
    let mut out = s!("  <thead>\n  <tr class=\"header\">");
    for name in columns.names() {
        out.push_str("<th>");
        out.push_str(&escape(name));
        out.push_str("</th>");
    }
    out.push_str("</tr>\n  </thead>\n");
    out
}

/// One `<tr>` per record. The first cell is the 1-based row number, then
/// one cell per file-backed column; short records get empty cells.
///
/// Cells are written back to back so a row's `textContent` is exactly the
/// concatenation of its cell texts (see `search::row_text`).
pub fn render_body(catalog: &Catalog, columns: &ColumnMap) -> String {
    let mut out = s!("  <tbody>\n");
    for (no, record) in catalog.numbered() {
        out.push_str("<tr><td>");
        out.push_str(&no.to_string());
        out.push_str("</td>");
        for column in 1..columns.column_count() {
            out.push_str("<td>");
            if let Some(value) = record.cell(columns, column) {
                out.push_str(&escape(value));
            }
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("  </tbody>\n");
    out
}

/// The catalog table fragment: `<table id="myTable">` with head and body.
pub fn render_table(catalog: &Catalog, columns: &ColumnMap) -> String {
    join!(
        format!("<table id=\"{TABLE_ID}\">\n"),
        &render_head(columns),
        &render_body(catalog, columns),
        "</table>\n",
    )
}

/// Plain text of a small HTML fragment (page descriptions): tags removed,
/// a few common entities decoded, whitespace collapsed.
pub fn to_plain_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&decode_entities(&out))
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&mdash;", "\u{2014}")
        .replace("&ndash;", "\u{2013}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
