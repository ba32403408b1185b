use thiserror::Error;

use crate::domain::{Panel, PanelKey};

/// Lowest valid row or column.
pub const MIN_POSITION: i32 = 0;
/// Highest valid row or column.
pub const MAX_POSITION: i32 = 250;
/// Panels installed before this year are rejected.
pub const EARLIEST_INSTALL_YEAR: i32 = 1980;

/// A broken business rule, rendered as one human-readable message.
///
/// Violations are expected outcomes, not faults: they are collected into a
/// [`crate::application::PanelResult`] and never returned as `Err`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PanelViolation {
    #[error("Panel is required.")]
    MissingPanel,

    #[error("Section is required.")]
    MissingSection,

    #[error("Section cannot be blank.")]
    BlankSection,

    #[error("Row must be between {min} and {max} (got {row}).", min = MIN_POSITION, max = MAX_POSITION)]
    RowOutOfRange { row: i32 },

    #[error("Column must be between {min} and {max} (got {column}).", min = MIN_POSITION, max = MAX_POSITION)]
    ColumnOutOfRange { column: i32 },

    #[error("Material is required.")]
    MissingMaterial,

    #[error("Year installed must be in the past (got {year}, current year is {current_year}).")]
    YearNotInPast { year: i32, current_year: i32 },

    #[error("Year installed must be {earliest} or later (got {year}).", earliest = EARLIEST_INSTALL_YEAR)]
    YearTooEarly { year: i32 },

    #[error("Duplicate panel: {key} already exists.")]
    Duplicate { key: PanelKey },

    #[error("Panel id must be set for update.")]
    MissingId,

    #[error("Panel id {id} not found.")]
    NotFound { id: i32 },
}

/// Field-level business rules for a candidate panel.
///
/// Every rule runs and every failure is collected, in a fixed order:
/// section, row, column, material, year. An absent panel short-circuits to a
/// single [`PanelViolation::MissingPanel`].
pub struct PanelValidator;

impl PanelValidator {
    /// Check `panel` against all field rules.
    ///
    /// `current_year` is the calendar year installations must precede; it is
    /// a parameter so the rules stay free of clock access.
    pub fn validate(panel: Option<&Panel>, current_year: i32) -> Vec<PanelViolation> {
        let Some(panel) = panel else {
            return vec![PanelViolation::MissingPanel];
        };

        let mut violations = Vec::new();

        match panel.section.as_deref() {
            None => violations.push(PanelViolation::MissingSection),
            Some(section) if section.trim().is_empty() => {
                violations.push(PanelViolation::BlankSection)
            }
            Some(_) => {}
        }

        if !Self::position_in_range(panel.row) {
            violations.push(PanelViolation::RowOutOfRange { row: panel.row });
        }

        if !Self::position_in_range(panel.column) {
            violations.push(PanelViolation::ColumnOutOfRange {
                column: panel.column,
            });
        }

        if panel.material.is_none() {
            violations.push(PanelViolation::MissingMaterial);
        }

        if panel.year_installed >= current_year {
            violations.push(PanelViolation::YearNotInPast {
                year: panel.year_installed,
                current_year,
            });
        } else if panel.year_installed < EARLIEST_INSTALL_YEAR {
            violations.push(PanelViolation::YearTooEarly {
                year: panel.year_installed,
            });
        }

        violations
    }

    fn position_in_range(position: i32) -> bool {
        (MIN_POSITION..=MAX_POSITION).contains(&position)
    }
}
