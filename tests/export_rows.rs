// tests/export_rows.rs
//
// CSV/TSV export of catalog rows and output path handling.

use std::fs;
use std::path::{Path, PathBuf};

use fcc_catalog::catalog::{Catalog, CatalogView, ColumnMap};
use fcc_catalog::config::options::{ExportFormat, ExportOptions, ParseOptions};
use fcc_catalog::csv::{catalog_to_export_string, header_row, view_to_export_string, write_row};
use fcc_catalog::file;

const DATA: &str = "\
p8_ee_ZZ_ecm240,,100,,100,,1,,0,,0,,0.1,,/eos/zz,,ee to ZZ, inclusive,,,,1.35,,1.0,,1.0
short_row,,5
last line is discarded
";

fn catalog() -> Catalog {
    Catalog::parse(DATA, &ParseOptions::default())
}

#[test]
fn csv_quotes_cells_holding_the_separator() {
    let out = catalog_to_export_string(&catalog(), &ExportOptions::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Name,Nevents,Nweights,"));
    assert_eq!(
        lines[1],
        "p8_ee_ZZ_ecm240,100,100,1,0,0,0.1,/eos/zz,\"ee to ZZ, inclusive\",,1.35,1.0,1.0"
    );
}

#[test]
fn short_records_are_padded_to_full_width() {
    let out = catalog_to_export_string(&catalog(), &ExportOptions::default());
    let last = out.lines().nth(2).unwrap();
    assert_eq!(last, "short_row,5,,,,,,,,,,,");
    assert_eq!(last.matches(',').count(), 12);
}

#[test]
fn tsv_with_row_numbers_and_no_header() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;
    opts.row_numbers = true;

    let out = catalog_to_export_string(&catalog(), &opts);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1\tp8_ee_ZZ_ecm240\t100\t"));
    // Comma is not the TSV separator, so no quoting.
    assert!(lines[0].contains("\tee to ZZ, inclusive\t"));
    assert!(lines[1].starts_with("2\tshort_row\t5\t"));
}

#[test]
fn header_row_with_and_without_numbers() {
    let columns = ColumnMap::catalog();
    let with = header_row(&columns, true);
    let without = header_row(&columns, false);
    assert_eq!(with.len(), 14);
    assert_eq!(with[0], "NO");
    assert_eq!(without.len(), 13);
    assert_eq!(without[0], "Name");
    assert_eq!(without[12], "Matching eff");
}

#[test]
fn filtered_view_exports_only_its_rows_with_catalog_numbers() {
    let catalog = catalog();
    let view = CatalogView::filtered(&catalog, "SHORT");
    let mut opts = ExportOptions::default();
    opts.row_numbers = true;
    opts.include_headers = false;

    let out = view_to_export_string(&view, &opts);
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("2,short_row,5,"));
}

#[test]
fn write_row_escapes_quotes_and_newlines() {
    let mut buf: Vec<u8> = Vec::new();
    write_row(&mut buf, &["say \"hi\"", "two\nlines", "plain"], ',').unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "\"say \"\"hi\"\"\",\"two\nlines\",plain\n");
}

#[test]
fn export_path_extension_follows_format() {
    let mut opts = ExportOptions::default();
    assert_eq!(opts.out_path(), Path::new("out").join("catalog.csv"));

    opts.set_path("exports/winter2023.txt");
    assert_eq!(opts.out_path(), Path::new("exports").join("winter2023.csv"));

    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), Path::new("exports").join("winter2023.tsv"));
}

#[test]
fn write_export_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let view = CatalogView::all(&catalog);

    let mut opts = ExportOptions::default();
    opts.set_path(&dir.path().join("nested/deeper/rows.csv").to_string_lossy());
    let written = file::write_export(&opts, &view).unwrap();

    assert_eq!(written, dir.path().join("nested/deeper/rows.csv"));
    let text = fs::read_to_string(&written).unwrap();
    assert_eq!(text.lines().count(), 3);

    let explicit = dir.path().join("plain.txt");
    file::write_export_to(&explicit, &opts, &view).unwrap();
    assert_eq!(fs::read_to_string(&explicit).unwrap(), text);
}

#[test]
fn single_out_path_resolution() {
    assert_eq!(file::resolve_single_out_path("", "index.html").unwrap(), PathBuf::from("index.html"));

    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().to_string_lossy().into_owned();
    assert_eq!(
        file::resolve_single_out_path(&existing, "index.html").unwrap(),
        dir.path().join("index.html")
    );

    let hinted = format!("{}/fresh/", existing);
    let resolved = file::resolve_single_out_path(&hinted, "index.html").unwrap();
    assert!(dir.path().join("fresh").is_dir());
    assert!(resolved.ends_with("fresh/index.html"));

    let named = dir.path().join("page.html");
    assert_eq!(
        file::resolve_single_out_path(&named.to_string_lossy(), "index.html").unwrap(),
        named
    );
}

#[test]
fn app_options_hold_parse_and_export_settings() {
    let opts = fcc_catalog::config::options::AppOptions {
        parse: ParseOptions::default(),
        export: ExportOptions::default(),
    };
    assert_eq!(opts, Default::default());
}
