pub mod api;
pub mod cli;
pub mod config;
pub mod draft;
pub mod editor;
pub mod input;
pub mod listing;
pub mod logging;
pub mod model;
pub mod session;
pub mod state;
pub mod tags;
pub mod toolbar;
pub mod tui;
pub mod ui;
pub mod worker;
