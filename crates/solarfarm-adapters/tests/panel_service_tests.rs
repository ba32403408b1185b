//! Integration tests: `PanelService` over the in-memory repository.

use solarfarm_adapters::InMemoryPanelRepository;
use solarfarm_core::{
    application::{PanelService, ports::PanelRepository},
    domain::{Panel, PanelMaterial},
};

const THIS_YEAR: i32 = 2026;

fn service() -> (PanelService, InMemoryPanelRepository) {
    let store = InMemoryPanelRepository::new();
    let service = PanelService::new(Box::new(store.clone())).with_current_year(THIS_YEAR);
    (service, store)
}

fn west_5_9(id: i32) -> Panel {
    Panel::new(5, 9, "West", PanelMaterial::CdTe, 2011)
        .with_id(id)
        .with_tracking(true)
}

// ── add ───────────────────────────────────────────────────────────────────────

#[test]
fn should_add_panel() {
    let (service, store) = service();

    let result = service.add(Some(&west_5_9(1))).unwrap();

    assert!(result.is_success());
    assert!(result.messages().is_empty());
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn should_not_add_absent_panel() {
    let (service, store) = service();

    let result = service.add(None).unwrap();

    assert!(!result.is_success());
    assert!(store.is_empty().unwrap());
}

#[test]
fn should_not_add_null_section() {
    let (service, _) = service();
    let panel = Panel {
        row: 55,
        ..west_5_9(1)
    }
    .with_section(None);

    let result = service.add(Some(&panel)).unwrap();

    assert!(!result.is_success());
    assert_eq!(result.messages().len(), 1);
}

#[test]
fn should_not_add_blank_section() {
    let (service, _) = service();
    let panel = Panel {
        row: -5,
        ..west_5_9(1)
    }
    .with_section(Some(String::new()));

    let result = service.add(Some(&panel)).unwrap();

    assert!(!result.is_success());
    assert_eq!(result.messages().len(), 2);
}

#[test]
fn should_not_add_invalid_row() {
    let (service, store) = service();
    let panel = Panel {
        row: -5,
        ..west_5_9(1)
    };

    let result = service.add(Some(&panel)).unwrap();

    assert!(!result.is_success());
    assert_eq!(result.messages().len(), 1);
    assert!(result.messages()[0].contains("Row"));
    assert!(store.is_empty().unwrap());
}

#[test]
fn should_not_add_invalid_column() {
    let (service, _) = service();
    let panel = Panel {
        column: 330,
        ..west_5_9(1)
    };

    let result = service.add(Some(&panel)).unwrap();

    assert!(!result.is_success());
    assert_eq!(result.messages().len(), 1);
    assert!(result.messages()[0].contains("Column"));
}

#[test]
fn should_not_add_null_material() {
    let (service, _) = service();

    let result = service.add(Some(&west_5_9(1).with_material(None))).unwrap();

    assert!(!result.is_success());
    assert_eq!(result.messages().len(), 1);
    assert!(result.messages()[0].contains("Material"));
}

#[test]
fn year_should_be_past() {
    let (service, _) = service();
    let panel = Panel {
        year_installed: THIS_YEAR,
        ..west_5_9(1)
    };

    assert!(!service.add(Some(&panel)).unwrap().is_success());
}

#[test]
fn year_should_be_after_eighty() {
    let (service, _) = service();
    let panel = Panel {
        year_installed: 1979,
        ..west_5_9(1)
    };

    assert!(!service.add(Some(&panel)).unwrap().is_success());
}

#[test]
fn should_not_create_duplicate() {
    let (service, store) = service();

    let first = service.add(Some(&west_5_9(1))).unwrap();
    let second = service.add(Some(&west_5_9(2))).unwrap();

    assert!(first.is_success());
    assert!(!second.is_success());
    assert_eq!(second.messages().len(), 1);
    assert!(second.messages()[0].contains("Duplicate"));
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn repeated_invalid_add_gives_same_outcome() {
    let (service, store) = service();
    let panel = Panel {
        row: -5,
        ..west_5_9(1)
    };

    let first = service.add(Some(&panel)).unwrap();
    let second = service.add(Some(&panel)).unwrap();

    assert_eq!(first, second);
    assert!(store.is_empty().unwrap());
}

#[test]
fn same_position_in_another_section_is_not_a_duplicate() {
    let (service, store) = service();

    service.add(Some(&west_5_9(1))).unwrap();
    let east = west_5_9(2).with_section(Some("East".into()));
    let result = service.add(Some(&east)).unwrap();

    assert!(result.is_success());
    assert_eq!(store.len().unwrap(), 2);
}

#[test]
fn add_does_not_mutate_the_candidate() {
    let (service, _) = service();
    let candidate = west_5_9(0);

    let result = service.add(Some(&candidate)).unwrap();

    assert_eq!(candidate.id, 0);
    assert_eq!(result.panel().map(|p| p.id), Some(1));
}

// ── update ────────────────────────────────────────────────────────────────────

#[test]
fn should_update_panel() {
    let (service, store) = service();
    service.add(Some(&west_5_9(1))).unwrap();

    let changed = Panel {
        year_installed: 2019,
        material: Some(PanelMaterial::Cigs),
        ..west_5_9(1)
    };
    let result = service.update(Some(&changed)).unwrap();

    assert!(result.is_success());
    assert_eq!(store.find_by_id(1).unwrap(), Some(changed));
}

#[test]
fn should_not_update_onto_existing_key() {
    let (service, store) = service();
    service.add(Some(&west_5_9(1))).unwrap();
    let other = Panel {
        row: 6,
        ..west_5_9(2)
    };
    service.add(Some(&other)).unwrap();

    let collide = Panel {
        row: 5,
        ..other.clone()
    };
    let result = service.update(Some(&collide)).unwrap();

    assert!(result.messages()[0].contains("Duplicate"));
    assert_eq!(store.find_by_id(2).unwrap(), Some(other));
}

#[test]
fn should_not_update_missing_panel() {
    let (service, _) = service();

    let result = service.update(Some(&west_5_9(12))).unwrap();

    assert!(!result.is_success());
    assert!(result.messages()[0].contains("12"));
}

// ── delete ────────────────────────────────────────────────────────────────────

#[test]
fn should_delete_panel() {
    let (service, store) = service();
    service.add(Some(&west_5_9(1))).unwrap();

    assert!(service.delete_by_id(1).unwrap().is_success());
    assert!(store.is_empty().unwrap());
}

#[test]
fn should_not_delete_missing_panel() {
    let (service, _) = service();

    assert!(!service.delete_by_id(1).unwrap().is_success());
}

// ── queries ───────────────────────────────────────────────────────────────────

#[test]
fn find_by_section_only_returns_that_section() {
    let (service, _) = service();
    service.add(Some(&west_5_9(1))).unwrap();
    service
        .add(Some(&west_5_9(2).with_section(Some("East".into()))))
        .unwrap();

    let west = service.find_by_section("West").unwrap();

    assert_eq!(west.len(), 1);
    assert_eq!(west[0].id, 1);
    assert_eq!(service.find_all().unwrap().len(), 2);
}

#[test]
fn add_after_highest_possible_id_is_a_storage_error() {
    let store = InMemoryPanelRepository::with_panels([west_5_9(i32::MAX)]).unwrap();
    let service = PanelService::new(Box::new(store.clone())).with_current_year(THIS_YEAR);
    let next = Panel {
        row: 1,
        column: 2,
        ..west_5_9(0)
    };

    assert!(service.add(Some(&next)).is_err());
    assert_eq!(store.len().unwrap(), 1);
}
