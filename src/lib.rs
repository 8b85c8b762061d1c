//! Terminal article reader with an adjustable presentation settings panel.

pub mod article;
pub mod cli;
pub mod config;
pub mod logging;
pub mod options;
pub mod outside_click;
pub mod panel;
pub mod tui;
