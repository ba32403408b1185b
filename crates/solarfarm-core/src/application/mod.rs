//! Application layer for SolarFarm.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PanelService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All field rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{PanelResult, PanelService};

// Re-export port traits (for adapter implementation)
pub use ports::PanelRepository;

pub use error::ApplicationError;
