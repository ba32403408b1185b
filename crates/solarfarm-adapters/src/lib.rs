//! Infrastructure adapters for SolarFarm.
//!
//! This crate implements the ports defined in
//! `solarfarm-core::application::ports`, plus the file reader that turns
//! panel batch files into candidate panels.

pub mod panel_loader;
pub mod repository;

// Re-export commonly used adapters
pub use panel_loader::{LoaderError, PanelFileLoader};
pub use repository::InMemoryPanelRepository;
