//! In-memory panel repository.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::{debug, trace};

use solarfarm_core::{
    application::{ApplicationError, ports::PanelRepository},
    domain::{Panel, PanelKey},
    error::SolarFarmResult,
};

/// Thread-safe in-memory panel store, keyed by id.
///
/// Every instance owns its own map; clones share it. Besides the port
/// contract, `create` refuses a second panel on an occupied business key so a
/// racing writer cannot slip a duplicate past the service's check.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPanelRepository {
    inner: Arc<RwLock<BTreeMap<i32, Panel>>>,
}

impl InMemoryPanelRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `panels`.
    ///
    /// Seeds go through [`PanelRepository::create`], so ids of `0` are
    /// assigned and duplicate keys are rejected.
    pub fn with_panels(panels: impl IntoIterator<Item = Panel>) -> SolarFarmResult<Self> {
        let store = Self::new();
        for panel in panels {
            store.create(panel)?;
        }
        Ok(store)
    }

    /// Get the number of panels.
    pub fn len(&self) -> SolarFarmResult<usize> {
        Ok(self.read()?.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> SolarFarmResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Remove every panel.
    pub fn clear(&self) -> SolarFarmResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> SolarFarmResult<RwLockReadGuard<'_, BTreeMap<i32, Panel>>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> SolarFarmResult<RwLockWriteGuard<'_, BTreeMap<i32, Panel>>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl PanelRepository for InMemoryPanelRepository {
    fn find_all(&self) -> SolarFarmResult<Vec<Panel>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn find_by_id(&self, id: i32) -> SolarFarmResult<Option<Panel>> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn find_by_section(&self, section: &str) -> SolarFarmResult<Vec<Panel>> {
        let inner = self.read()?;

        let mut panels: Vec<Panel> = inner
            .values()
            .filter(|p| p.section.as_deref() == Some(section))
            .cloned()
            .collect();
        panels.sort_by_key(|p| (p.row, p.column));

        Ok(panels)
    }

    fn find_by_key(&self, key: &PanelKey) -> SolarFarmResult<Option<Panel>> {
        trace!(%key, "Looking up panel by key");
        Ok(self.read()?.values().find(|p| key.matches(p)).cloned())
    }

    fn create(&self, mut panel: Panel) -> SolarFarmResult<Panel> {
        let mut inner = self.write()?;

        if let Some(key) = panel.key() {
            if inner.values().any(|p| key.matches(p)) {
                return Err(ApplicationError::DuplicateKey { key }.into());
            }
        }

        if panel.id == 0 {
            panel.id = match inner.keys().next_back() {
                None => 1,
                Some(last) => last.checked_add(1).ok_or_else(|| ApplicationError::DataAccess {
                    operation: "create",
                    reason: "panel id space exhausted".into(),
                })?,
            };
        } else if inner.contains_key(&panel.id) {
            return Err(ApplicationError::DataAccess {
                operation: "create",
                reason: format!("panel id {} is already in use", panel.id),
            }
            .into());
        }

        debug!(id = panel.id, "Storing panel");
        inner.insert(panel.id, panel.clone());
        Ok(panel)
    }

    fn update(&self, panel: &Panel) -> SolarFarmResult<bool> {
        let mut inner = self.write()?;

        match inner.get_mut(&panel.id) {
            Some(stored) => {
                *stored = panel.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_by_id(&self, id: i32) -> SolarFarmResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }
}
