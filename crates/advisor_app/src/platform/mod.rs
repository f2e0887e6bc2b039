pub mod app;
pub mod config;
pub mod effects;
pub mod headless;
pub mod logging;
pub mod ui;
