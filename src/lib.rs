//! DSA Tracker - progress tracking for a 12-week problem-solving curriculum
//!
//! Mark problems complete, attach notes, filter the catalog and follow
//! aggregate statistics, all persisted locally.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod notes;
pub mod progress;
pub mod report;
pub mod stats;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod view;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
