// src/progress.rs
//
// Site build callbacks. The CLI prints them, tests count them.

use std::path::Path;

pub trait Progress {
    /// Number of pages about to be rendered.
    fn begin(&mut self, _pages: usize) {}

    /// Page whose data file could not be read; it is still written.
    fn missing_data(&mut self, _title: &str, _data: &Path) {}

    fn page_written(&mut self, _title: &str, _path: &Path) {}

    /// Called once at the end, also after a failed write.
    fn finish(&mut self) {}
}

pub struct NullProgress;
impl Progress for NullProgress {}
