//! Terminal dashboard
//!
//! A read-only ratatui view of the ledger: headline metrics, the spend by
//! category chart and the latest expenses. Entries are recorded through the
//! CLI; the dashboard reloads the files on demand.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_dashboard;
