// src/catalog/parse.rs
//
// Line/field splitting for catalog files: one record per line, fields
// separated by a literal token (`,,`), no header, no escaping.

use crate::config::options::{ParseOptions, TrailingLine};

use super::{Catalog, Record};

/// Lines of `text` that become records under `trailing`.
///
/// `DiscardLast` drops the final line whatever it holds, so R lines give
/// R-1 records. `SkipBlank` keeps every line that has any non-whitespace.
pub fn record_lines<'a>(text: &'a str, trailing: TrailingLine) -> Vec<&'a str> {
    let lines: Vec<&str> = text.lines().collect();
    match trailing {
        TrailingLine::DiscardLast => {
            let keep = lines.len().saturating_sub(1);
            if let Some(last) = lines.last() {
                if !last.trim().is_empty() {
                    logd!("Parse: Discarding non-empty last line ({} bytes)", last.len());
                }
            }
            lines.into_iter().take(keep).collect()
        }
        TrailingLine::SkipBlank => lines.into_iter().filter(|l| !l.trim().is_empty()).collect(),
    }
}

pub fn parse_catalog(text: &str, opts: &ParseOptions) -> Catalog {
    let records: Vec<Record> = record_lines(text, opts.trailing)
        .into_iter()
        .map(|line| Record::from_line(line, &opts.delimiter))
        .collect();

    let short = records.iter().filter(|r| r.missing_fields() > 0).count();
    if short > 0 {
        logd!("Parse: {} of {} rows have missing fields", short, records.len());
    }

    Catalog::new(records)
}
