// src/render/search.rs
//
// Row filter: a row stays visible when its text contains the query,
// compared upper-cased on both sides. The page runs it in the browser on
// every keyup; the GUI and the CLI run the same rule here.

use crate::catalog::Record;
use crate::config::consts::{SEARCH_INPUT_ID, TABLE_ID};

/// Inline script for the catalog page. Hides non-matching body rows;
/// never touches the DOM structure.
pub fn search_script() -> String {
    format!(
        r#"function search() {{
  var filter = document.getElementById("{SEARCH_INPUT_ID}").value.toUpperCase();
  var rows = document.getElementById("{TABLE_ID}").tBodies[0].rows;
  for (var i = 0; i < rows.length; i++) {{
    var text = rows[i].textContent || rows[i].innerText || "";
    rows[i].style.display = text.toUpperCase().indexOf(filter) > -1 ? "" : "none";
  }}
}}
"#
    )
}

/// Text of a rendered row as the browser sees it: row number followed by
/// every cell value, no separators. Missing fields contribute nothing.
pub fn row_text(row_number: usize, record: &Record) -> String {
    let mut out = row_number.to_string();
    for field in record.fields() {
        out.push_str(field);
    }
    out
}

pub fn normalize_query(query: &str) -> String {
    query.to_uppercase()
}

/// Case-insensitive substring test; an empty query matches everything.
pub fn matches(text: &str, query: &str) -> bool {
    matches_normalized(text, &normalize_query(query))
}

/// Same as [`matches`] with an already upper-cased needle.
pub fn matches_normalized(text: &str, needle: &str) -> bool {
    needle.is_empty() || text.to_uppercase().contains(needle)
}
