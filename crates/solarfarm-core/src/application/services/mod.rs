//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! use cases like "add a panel" or "move a panel".

pub mod panel_result;
pub mod panel_service;

pub use panel_result::PanelResult;
pub use panel_service::PanelService;
