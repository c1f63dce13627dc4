// src/gui/mod.rs
pub mod app;
pub mod components;
mod actions;

pub use app::run;
