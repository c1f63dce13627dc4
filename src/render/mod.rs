// src/render/mod.rs
//! Catalog -> HTML.
//!
//! - `html`: escaping and the `<table>` fragment (header + one row per record).
//! - `page`: standalone document around the table (title, heading, search box).
//! - `search`: the page's row filter script and the same rule in Rust.

pub mod html;
pub mod page;
pub mod search;

pub use html::{escape, render_table};
pub use page::render_page;
