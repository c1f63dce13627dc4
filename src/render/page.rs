// src/render/page.rs
//
// Standalone catalog page: title, heading, search box, table, script.
// Site-wide navigation and styling live outside this crate; the built-in
// style below only keeps the table readable when no stylesheet is linked.

use std::borrow::Cow;

use crate::catalog::{Catalog, ColumnMap};
use crate::config::consts::{SEARCH_INPUT_ID, SEARCH_PLACEHOLDER};
use crate::config::options::{Heading, PageConfig, RenderOptions};
use crate::error::CatalogError;

use super::html::{escape, render_table};
use super::search::search_script;

pub const DEFAULT_STYLE: &str = "\
body { font-family: sans-serif; margin: 1em 2em; }
#myInput { width: 40%; font-size: 14px; padding: 6px 10px; margin-bottom: 12px; }
#myTable { border-collapse: collapse; width: 100%; font-size: 13px; }
#myTable th, #myTable td { text-align: left; padding: 4px 8px; border: 1px solid #ddd; }
#myTable tr.header, #myTable tr:hover { background-color: #f1f1f1; }
.unavailable { color: #b00020; }
";

/// Render a full page for `page`.
///
/// A catalog that failed to load still produces the whole page: the table
/// keeps its header, the body is empty, and a notice names the file.
pub fn render_page(
    page: &PageConfig,
    catalog: &Result<Catalog, CatalogError>,
    opts: &RenderOptions,
) -> String {
    let columns = ColumnMap::catalog();
    let empty = Catalog::default();

    let (rows, notice) = match catalog {
        Ok(c) => (c, None),
        Err(e) => {
            loge!("Render: {} ({})", page.title, e);
            (&empty, Some(unavailable_notice(e)))
        }
    };

    let mut out = s!("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(&page.title)));
    match &opts.stylesheet {
        Some(href) => {
            out.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", escape(href)));
        }
        None => {
            out.push_str("<style>\n");
            out.push_str(DEFAULT_STYLE);
            out.push_str("</style>\n");
        }
    }
    out.push_str("</head>\n<body>\n\n");

    // Description is trusted markup (entities such as &mdash; pass through).
    let heading = match page.heading() {
        Heading::Description(html) => Cow::Borrowed(html),
        Heading::Title(text) => escape(text),
    };
    out.push_str(&format!("<h2>{heading}</h2>\n"));
    if let Some(n) = notice {
        out.push_str(&n);
    }
    out.push_str(&format!(
        "<input type=\"text\" id=\"{SEARCH_INPUT_ID}\" onkeyup=\"search()\" \
         placeholder=\"{SEARCH_PLACEHOLDER}\" title=\"Type in a name\">\n"
    ));
    out.push_str(&render_table(rows, &columns));
    out.push_str("<script>\n");
    out.push_str(&search_script());
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

fn unavailable_notice(err: &CatalogError) -> String {
    match err {
        CatalogError::FileUnavailable { path, .. } => format!(
            "<p class=\"unavailable\">Catalog data unavailable: {}</p>\n",
            escape(&path.display().to_string())
        ),
        other => format!(
            "<p class=\"unavailable\">Catalog data unavailable: {}</p>\n",
            escape(&other.to_string())
        ),
    }
}
