// Shared fixtures for command and query tests

use std::path::PathBuf;
use std::sync::Arc;

use gala_domain::{EntityStore, EventId, ExportService, RecordSets, Role, StorageGateway};

use crate::commands::auth_commands;
use crate::state::RuntimeConfig;
use crate::AppState;

/// Gateway that accepts every save and loads nothing. Command tests only
/// care about the in-memory store.
pub struct NullGateway;

impl StorageGateway for NullGateway {
    fn load_all(&self) -> anyhow::Result<RecordSets> {
        Ok(RecordSets::default())
    }
    fn save_all(&self, _store: &EntityStore) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Exporter that writes nothing and reports a fixed path.
pub struct NullExporter;

impl ExportService for NullExporter {
    fn export_event_attendees(
        &self,
        _store: &EntityStore,
        _event_id: EventId,
    ) -> anyhow::Result<PathBuf> {
        Ok(PathBuf::from("attendees.txt"))
    }
    fn export_events(&self, _store: &EntityStore) -> anyhow::Result<PathBuf> {
        Ok(PathBuf::from("events.txt"))
    }
    fn export_inventory(&self, _store: &EntityStore) -> anyhow::Result<PathBuf> {
        Ok(PathBuf::from("inventory.txt"))
    }
}

pub fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        data_dir: "./data".to_string(),
        export_dir: "./exports".to_string(),
        log_dir: String::new(),
        history_file: String::new(),
        max_attendees_per_event: 0,
        seed_admin_username: "admin".to_string(),
        seed_admin_password: "admin123".to_string(),
    }
}

pub fn test_state() -> AppState {
    AppState::new(
        test_config(),
        EntityStore::default(),
        Arc::new(NullGateway),
        Arc::new(NullExporter),
    )
}

pub fn login_as_admin(state: &AppState) {
    auth_commands::create_user(state, "admin", "admin123", Role::Admin).expect("create admin");
    auth_commands::login(state, "admin", "admin123").expect("login admin");
}

pub fn login_as_user(state: &AppState, username: &str) {
    auth_commands::create_user(state, username, "secret1", Role::RegularUser)
        .expect("create user");
    auth_commands::login(state, username, "secret1").expect("login user");
}
