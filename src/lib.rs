// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod progress;
pub mod render;
pub mod site;

pub use catalog::{Catalog, CatalogView, ColumnMap, Record};
pub use error::{CatalogError, Result};
