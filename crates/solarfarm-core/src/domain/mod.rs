//! Core domain layer for SolarFarm.
//!
//! This module contains pure business logic: the panel model, its material
//! catalogue, the business key, and the validation rules. All storage
//! concerns are handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or clock calls (the current year is
//!   passed in)
//! - **Immutable inputs**: validation borrows panels and never mutates them

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::panel::{Panel, PanelKey};

pub use error::DomainError;

pub use value_objects::PanelMaterial;

pub use validation::{
    EARLIEST_INSTALL_YEAR, MAX_POSITION, MIN_POSITION, PanelValidator, PanelViolation,
};
