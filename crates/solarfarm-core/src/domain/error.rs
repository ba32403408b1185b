// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// These are faults in *constructing* domain values (parsing a material,
/// deriving a business key). Business-rule violations on a candidate panel
/// are reported as [`crate::domain::PanelViolation`]s instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown panel material: {0}")]
    UnknownMaterial(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownMaterial(name) => {
                let mut suggestions = vec![
                    format!("'{}' is not a known panel material", name),
                    "Known materials:".into(),
                ];
                for material in crate::domain::PanelMaterial::ALL {
                    suggestions.push(format!(
                        "  • {:<9} - {}",
                        material.as_str(),
                        material.display_name()
                    ));
                }
                suggestions
            }
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
        }
    }
}
