//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `solarfarm-adapters` crate provides implementations.

use crate::domain::{Panel, PanelKey};
use crate::error::SolarFarmResult;

/// Port for panel storage and retrieval.
///
/// Implemented by:
/// - `solarfarm_adapters::repository::InMemoryPanelRepository` (tests, CLI)
///
/// ## Design Notes
///
/// - Every method may fail with a storage-access error; the service
///   propagates those untouched.
/// - `update` and `delete_by_id` report "nothing there" as `Ok(false)`, not
///   as an error.
/// - Synchronous and object-safe so services can hold a `Box<dyn _>`.
#[cfg_attr(test, mockall::automock)]
pub trait PanelRepository: Send + Sync {
    /// List every stored panel, ordered by id.
    fn find_all(&self) -> SolarFarmResult<Vec<Panel>>;

    /// Get a panel by id.
    fn find_by_id(&self, id: i32) -> SolarFarmResult<Option<Panel>>;

    /// List the panels of one section, ordered by row then column.
    fn find_by_section(&self, section: &str) -> SolarFarmResult<Vec<Panel>>;

    /// Find the panel occupying a business key.
    fn find_by_key(&self, key: &PanelKey) -> SolarFarmResult<Option<Panel>>;

    /// Persist a new panel, returning it with its id confirmed.
    fn create(&self, panel: Panel) -> SolarFarmResult<Panel>;

    /// Replace the stored panel with the same id. `false` if none exists.
    fn update(&self, panel: &Panel) -> SolarFarmResult<bool>;

    /// Remove a panel. `false` if none exists.
    fn delete_by_id(&self, id: i32) -> SolarFarmResult<bool>;
}
