//! Panel Service - validation and persistence orchestrator.
//!
//! Every write follows the same workflow:
//! 1. Run the field rules (`PanelValidator`)
//! 2. Enforce business-key uniqueness through the repository
//! 3. Delegate the write to the repository
//!
//! Rule violations come back as a failed [`PanelResult`]. Storage faults come
//! back as `Err` and are never folded into the result.
//!
//! The duplicate check and the write are two separate repository calls. The
//! service holds no lock across them; callers sharing a repository between
//! threads need the store itself to enforce uniqueness.

use chrono::{Datelike, Local};
use tracing::{debug, info, instrument};

use crate::{
    application::{PanelResult, ports::PanelRepository},
    domain::{Panel, PanelKey, PanelValidator, PanelViolation},
    error::SolarFarmResult,
};

/// Service for panel operations.
pub struct PanelService {
    repository: Box<dyn PanelRepository>,
    current_year: Option<i32>,
}

impl PanelService {
    /// Create a new panel service over the given repository.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use solarfarm_core::application::{PanelService, ports::PanelRepository};
    ///
    /// # fn build(repository: Box<dyn PanelRepository>) {
    /// let service = PanelService::new(repository);
    /// # }
    /// ```
    pub fn new(repository: Box<dyn PanelRepository>) -> Self {
        Self {
            repository,
            current_year: None,
        }
    }

    /// Pin the calendar year the install-year rule compares against.
    ///
    /// Without this the local clock's year is read on every call.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }

    /// List all panels.
    pub fn find_all(&self) -> SolarFarmResult<Vec<Panel>> {
        self.repository.find_all()
    }

    /// List the panels in one section, ordered by row then column.
    pub fn find_by_section(&self, section: &str) -> SolarFarmResult<Vec<Panel>> {
        self.repository.find_by_section(section)
    }

    /// Validate and store a new panel.
    #[instrument(skip_all, fields(panel = %DisplayOpt(panel)))]
    pub fn add(&self, panel: Option<&Panel>) -> SolarFarmResult<PanelResult> {
        let (panel, key) = match self.checked(panel) {
            Ok(checked) => checked,
            Err(rejected) => return Ok(rejected),
        };

        if self.repository.find_by_key(&key)?.is_some() {
            debug!(%key, "Duplicate panel rejected");
            return Ok(PanelResult::failure([PanelViolation::Duplicate { key }]));
        }

        let stored = self.repository.create(panel.clone())?;
        info!(id = stored.id, %key, "Panel added");

        Ok(PanelResult::success(stored))
    }

    /// Validate and replace an existing panel, matched by id.
    ///
    /// The panel may keep its own business key; it may not take one owned by
    /// a different panel.
    #[instrument(skip_all, fields(panel = %DisplayOpt(panel)))]
    pub fn update(&self, panel: Option<&Panel>) -> SolarFarmResult<PanelResult> {
        let (panel, key) = match self.checked(panel) {
            Ok(checked) => checked,
            Err(rejected) => return Ok(rejected),
        };

        if panel.id <= 0 {
            return Ok(PanelResult::failure([PanelViolation::MissingId]));
        }

        if self.repository.find_by_id(panel.id)?.is_none() {
            return Ok(PanelResult::failure([PanelViolation::NotFound { id: panel.id }]));
        }

        let clash = self
            .repository
            .find_by_key(&key)?
            .filter(|existing| existing.id != panel.id);
        if clash.is_some() {
            debug!(%key, "Update would duplicate another panel");
            return Ok(PanelResult::failure([PanelViolation::Duplicate { key }]));
        }

        if !self.repository.update(panel)? {
            return Ok(PanelResult::failure([PanelViolation::NotFound { id: panel.id }]));
        }
        info!(id = panel.id, %key, "Panel updated");

        Ok(PanelResult::success(panel.clone()))
    }

    /// Remove a panel by id.
    #[instrument(skip(self))]
    pub fn delete_by_id(&self, id: i32) -> SolarFarmResult<PanelResult> {
        if !self.repository.delete_by_id(id)? {
            return Ok(PanelResult::failure([PanelViolation::NotFound { id }]));
        }
        info!(id, "Panel deleted");

        Ok(PanelResult::new())
    }

    /// Run the field rules, handing back the panel and its key when they pass
    /// or the failed result when they don't.
    fn checked<'a>(&self, panel: Option<&'a Panel>) -> Result<(&'a Panel, PanelKey), PanelResult> {
        let violations = PanelValidator::validate(panel, self.current_year());

        match panel {
            Some(panel) if violations.is_empty() => match panel.key() {
                Some(key) => Ok((panel, key)),
                None => Err(PanelResult::failure([PanelViolation::MissingSection])),
            },
            _ => {
                debug!(count = violations.len(), "Panel failed validation");
                Err(PanelResult::failure(violations))
            }
        }
    }
}

/// Span field helper for an optional panel.
struct DisplayOpt<'a>(Option<&'a Panel>);

impl std::fmt::Display for DisplayOpt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(panel) => std::fmt::Display::fmt(panel, f),
            None => f.write_str("none"),
        }
    }
}
