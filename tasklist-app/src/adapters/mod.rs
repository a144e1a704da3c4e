//! Platform-agnostic storage adapters for non-browser frontends (TUI, CLI).

#[cfg(feature = "sqlite-store")]
mod sqlite;

#[cfg(feature = "sqlite-store")]
pub use sqlite::SqliteStore;
