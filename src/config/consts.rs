// src/config/consts.rs

// Catalog file format
pub const DELIMITER: &str = ",,";
pub const FIELD_COUNT: usize = 13;
pub const COLUMN_NAMES: [&str; FIELD_COUNT + 1] = [
    "NO",
    "Name",
    "Nevents",
    "Nweights",
    "Nfiles",
    "Nbad",
    "Neos",
    "Size (GB)",
    "Output Path",
    "Main Process",
    "Final States",
    "Cross Section (pb)",
    "K-factor",
    "Matching eff",
];

// Page markup hooks (the search script looks these up by id)
pub const TABLE_ID: &str = "myTable";
pub const SEARCH_INPUT_ID: &str = "myInput";
pub const SEARCH_PLACEHOLDER: &str = "Search for names..";

// Output
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_PAGE_FILE: &str = "index.html";
pub const DEFAULT_EXPORT_STEM: &str = "catalog";
pub const NO_GEN_TYPE: &str = "none";

// Local state
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_MANIFEST: &str = "site.json";
