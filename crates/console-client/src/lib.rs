//! console-client
//!
//! Terminal order console for a trading backend's REST API: the HTTP
//! `Backend`, the runtime that executes console commands and drives the sync
//! loop, configuration, and the ratatui front end.

pub mod api;
pub mod app;
pub mod config;
pub mod runtime;
pub mod ui;

mod components;
