// tests/search_filter.rs
//
// Row filter shared by the page script, the GUI and the CLI.

use fcc_catalog::catalog::{Catalog, CatalogView};
use fcc_catalog::config::options::ParseOptions;
use fcc_catalog::render::search::{matches, row_text, search_script};

fn sample() -> Catalog {
    let text = "\
p8_ee_ZZ_ecm240,,100,,100,,1,,0,,0,,0.1,,/eos/zz,,inclusive,,,,1.35,,1.0,,1.0
p8_ee_WW_ecm240,,200,,200,,2,,0,,0,,0.2,,/eos/ww,,inclusive,,,,16.4,,1.0,,1.0
wzp6_ee_mumuH_ecm240,,300,,300,,3,,0,,0,,0.3,,/eos/mumuh,,ee to mumu H,,H inclusive,,0.0067,,1.0,,1.0
wzp6_ee_nunuH_Hbb_ecm365,,400,,400,,4,,0,,0,,0.4,,/eos/nunuh,,ee to nunu H,,H to bb,,0.027,,1.0,,1.0
";
    Catalog::parse(text, &ParseOptions::default())
}

#[test]
fn matches_is_case_insensitive_substring() {
    assert!(matches("p8_ee_ZZ_ecm240", "zz"));
    assert!(matches("p8_ee_ZZ_ecm240", "EE_zz"));
    assert!(!matches("p8_ee_ZZ_ecm240", "ww"));
    assert!(matches("anything", ""));
}

#[test]
fn row_text_is_number_then_cells_without_separators() {
    let catalog = Catalog::parse("ab,,1,,2\n\n", &ParseOptions::default());
    let record = catalog.get(0).unwrap();
    assert_eq!(row_text(1, record), "1ab12");
}

#[test]
fn filter_keeps_exactly_the_matching_rows() {
    let catalog = sample();
    assert_eq!(catalog.len(), 3);

    let view = CatalogView::filtered(&catalog, "ECM240");
    assert_eq!(view.row_ix, vec![0, 1, 2]);

    let view = CatalogView::filtered(&catalog, "mumuh");
    assert_eq!(view.row_ix, vec![2]);

    // Matches in any column, not only Name.
    let view = CatalogView::filtered(&catalog, "/eos/WW");
    assert_eq!(view.row_ix, vec![1]);

    let view = CatalogView::filtered(&catalog, "no such dataset");
    assert!(view.is_empty());
}

#[test]
fn hidden_rows_are_exactly_those_without_the_query() {
    let catalog = sample();
    let query = "Inclusive";
    let view = CatalogView::filtered(&catalog, query);

    for (no, record) in catalog.numbered() {
        let shown = view.row_ix.contains(&(no - 1));
        assert_eq!(shown, row_text(no, record).to_uppercase().contains(&query.to_uppercase()));
    }
}

#[test]
fn filtered_rows_keep_catalog_row_numbers() {
    let catalog = sample();
    let view = CatalogView::filtered(&catalog, "WW");
    let rows: Vec<_> = view.rows().map(|(no, r)| (no, r.name().unwrap().to_string())).collect();
    assert_eq!(rows, vec![(2, "p8_ee_WW_ecm240".to_string())]);
    assert_eq!(view.row(0).map(|(no, _)| no), Some(2));
    assert!(view.row(1).is_none());
}

#[test]
fn clearing_the_query_shows_every_row_again() {
    let catalog = sample();
    assert_eq!(CatalogView::filtered(&catalog, "mumu").len(), 1);
    assert_eq!(CatalogView::filtered(&catalog, "").len(), catalog.len());
    assert_eq!(CatalogView::all(&catalog).len(), catalog.len());
}

#[test]
fn from_indices_drops_out_of_range_rows() {
    let catalog = sample();
    let view = CatalogView::from_indices(&catalog, vec![2, 7, 0]);
    assert_eq!(view.row_ix, vec![2, 0]);
}

#[test]
fn page_script_hides_rows_by_upper_cased_text() {
    let script = search_script();
    assert!(script.contains("getElementById(\"myInput\").value.toUpperCase()"));
    assert!(script.contains("getElementById(\"myTable\").tBodies[0].rows"));
    assert!(script.contains("style.display"));
}
