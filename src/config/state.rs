// src/config/state.rs
use super::consts::DEFAULT_MANIFEST;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Text fields of the load bar
    pub data_path_text: String,
    pub manifest_path_text: String,

    /// Live search query; rows are refiltered whenever it changes
    pub search: String,

    /// Active tab index into the loaded manifest's pages
    pub current_page_index: Option<usize>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1300,
            window_h: 760,
            data_path_text: s!(),
            manifest_path_text: s!(DEFAULT_MANIFEST),
            search: s!(),
            current_page_index: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
