//! SolarFarm Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the SolarFarm
//! panel inventory, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         solarfarm-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (PanelService -> PanelResult)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (PanelRepository)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   solarfarm-adapters (Infrastructure)   │
//! │       (InMemoryPanelRepository)         │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Panel, PanelMaterial, PanelValidator)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use solarfarm_core::prelude::*;
//!
//! # fn run(repository: Box<dyn PanelRepository>) -> SolarFarmResult<()> {
//! let service = PanelService::new(repository);
//!
//! let panel = Panel::new(5, 9, "West", PanelMaterial::CdTe, 2011);
//! let result = service.add(Some(&panel))?;
//!
//! assert!(result.is_success());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{PanelResult, PanelService, ports::PanelRepository};
    pub use crate::domain::{Panel, PanelKey, PanelMaterial, PanelValidator, PanelViolation};
    pub use crate::error::{SolarFarmError, SolarFarmResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
