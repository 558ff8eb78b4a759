pub mod args;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod stats;
pub mod tracker;
pub mod ui;
