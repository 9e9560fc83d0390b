pub mod app;
pub mod config;
pub mod dispatch;
pub mod dnd;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod project;
pub mod state;
pub mod ui;
pub mod validation;
pub mod views;
