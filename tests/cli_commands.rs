// tests/cli_commands.rs
//
// Subcommands end to end: argument parsing, files on disk, captured output.

use std::fs;
use std::path::Path;

use clap::Parser;
use fcc_catalog::cli::{run_to, Cli};

const DATA: &str = "\
p8_ee_ZZ_ecm240,,100,,100,,1,,0,,0,,0.1,,/eos/zz,,inclusive,,,,1.35,,1.0,,1.0
wzp6_ee_mumuH_ecm240,,300,,300,,3,,0,,0,,0.3,,/eos/mumuh,,ee to mumu H,,H inclusive,,0.0067,,1.0,,1.0
";

fn write_data(dir: &Path) -> String {
    let path = dir.join("winter2023_IDEA.txt");
    fs::write(&path, DATA).unwrap();
    path.to_string_lossy().into_owned()
}

fn run_args(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out: Vec<u8> = Vec::new();
    run_to(cli, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn search_prints_matching_rows_as_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path());

    let out = run_args(&["cli", "search", &data, "ZZ", "--skip-blank"]);
    assert_eq!(out, "1\tp8_ee_ZZ_ecm240\t100\t100\t1\t0\t0\t0.1\t/eos/zz\tinclusive\t\t1.35\t1.0\t1.0\n");

    let out = run_args(&["cli", "search", &data, "MUMUH", "--skip-blank"]);
    assert!(out.starts_with("2\twzp6_ee_mumuH_ecm240\t"));
    assert_eq!(out.lines().count(), 1);

    // Default policy drops the last line, so the second row is gone.
    assert_eq!(run_args(&["cli", "search", &data, "MUMUH"]), "");
}

#[test]
fn render_into_a_directory_writes_index_html() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path());
    let out_dir = format!("{}/pages/", dir.path().display());

    let out = run_args(&["cli", "render", &data, "--title", "T<b>", "-o", &out_dir]);
    let page = dir.path().join("pages").join("index.html");
    assert!(out.starts_with("Wrote "));
    assert!(out.contains("(1 rows)"));

    let html = fs::read_to_string(page).unwrap();
    assert!(html.contains("<h2>T&lt;b&gt;</h2>"));
    assert_eq!(html.matches("<tr><td>").count(), 1);
}

#[test]
fn render_without_out_prints_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path());

    let html = run_args(&["cli", "render", &data]);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>winter2023_IDEA</title>"));
}

#[test]
fn export_tsv_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path());

    let out = run_args(&["cli", "export", &data, "--format", "tsv", "--row-numbers", "--skip-blank"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("NO\tName\tNevents\t"));
    assert!(lines[2].starts_with("2\twzp6_ee_mumuH_ecm240\t"));
}

#[test]
fn site_command_builds_every_page() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let manifest = dir.path().join("site.json");
    fs::write(
        &manifest,
        r#"{ "pages": [ { "data_file": "winter2023_IDEA.txt", "title": "IDEA",
             "acc": "FCCee", "evt_type": "delphes", "campaign": "winter2023", "det": "idea" } ] }"#,
    )
    .unwrap();
    let out_dir = dir.path().join("site");

    let out = run_args(&[
        "cli",
        "site",
        &manifest.to_string_lossy(),
        "-o",
        &out_dir.to_string_lossy(),
    ]);
    assert!(out.starts_with("Wrote 1 pages into "));
    assert!(out_dir.join("FCCee/delphes/winter2023/idea/index.html").is_file());
}

#[test]
fn missing_data_fails_export() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let cli = Cli::try_parse_from(["cli", "export", &*missing.to_string_lossy()]).unwrap();
    let mut out: Vec<u8> = Vec::new();
    let err = run_to(cli, &mut out).unwrap_err();
    assert!(err.is_file_unavailable());
}
