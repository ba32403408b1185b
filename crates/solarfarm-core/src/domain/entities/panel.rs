//! The panel entity and its business key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, PanelMaterial};

/// One installed panel in the farm.
///
/// `section` and `material` are optional because a panel is a *candidate*
/// until the validator has looked at it: a record read from a batch file or
/// built by a caller may be missing either, and that absence has to survive
/// long enough to be reported as a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Caller-assigned identifier. `0` asks the repository to assign one.
    #[serde(default)]
    pub id: i32,
    pub row: i32,
    pub column: i32,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub tracking: bool,
    #[serde(default)]
    pub material: Option<PanelMaterial>,
    #[serde(alias = "yearInstalled")]
    pub year_installed: i32,
}

impl Panel {
    /// Build a fully-populated, untracked panel with no id yet.
    pub fn new(
        row: i32,
        column: i32,
        section: impl Into<String>,
        material: PanelMaterial,
        year_installed: i32,
    ) -> Self {
        Self {
            id: 0,
            row,
            column,
            section: Some(section.into()),
            tracking: false,
            material: Some(material),
            year_installed,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn with_tracking(mut self, tracking: bool) -> Self {
        self.tracking = tracking;
        self
    }

    pub fn with_section(mut self, section: Option<String>) -> Self {
        self.section = section;
        self
    }

    pub fn with_material(mut self, material: Option<PanelMaterial>) -> Self {
        self.material = material;
        self
    }

    /// The business key, if the panel has a section to key on.
    pub fn key(&self) -> Option<PanelKey> {
        PanelKey::try_from(self).ok()
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}-{}-{} ({}, {})",
            self.id,
            self.section.as_deref().unwrap_or("?"),
            self.row,
            self.column,
            self.material.map_or("no material", |m| m.as_str()),
            self.year_installed,
        )
    }
}

/// Uniqueness key of a stored panel: `(row, column, section)`.
///
/// Two panels with the same key are duplicates regardless of their ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelKey {
    pub row: i32,
    pub column: i32,
    pub section: String,
}

impl PanelKey {
    pub fn new(row: i32, column: i32, section: impl Into<String>) -> Self {
        Self {
            row,
            column,
            section: section.into(),
        }
    }

    /// Whether `panel` sits at this key.
    pub fn matches(&self, panel: &Panel) -> bool {
        panel.row == self.row
            && panel.column == self.column
            && panel.section.as_deref() == Some(self.section.as_str())
    }
}

impl TryFrom<&Panel> for PanelKey {
    type Error = DomainError;

    fn try_from(panel: &Panel) -> Result<Self, Self::Error> {
        let section = panel
            .section
            .as_ref()
            .ok_or(DomainError::MissingRequiredField { field: "section" })?;

        Ok(Self::new(panel.row, panel.column, section.clone()))
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, column {} in section {}",
            self.row, self.column, self.section
        )
    }
}
