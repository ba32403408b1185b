//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `solarfarm-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `PanelRepository`: Panel storage/retrieval

pub mod output;

pub use output::PanelRepository;

#[cfg(test)]
pub use output::MockPanelRepository;
