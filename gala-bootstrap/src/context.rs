use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use gala_application::AppState;
use gala_domain::ports::StorageGateway;
use gala_domain::{EntityStore, Role, User};
use gala_infrastructure::{AppConfig, FileExporter, FlatFileStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();

        let gateway = Arc::new(FlatFileStore::new(&runtime_config.data_dir));
        let records = gateway.load_all()?;
        let mut store = EntityStore::from_records(records);
        for warning in store.integrity_warnings() {
            warn!("{}", warning);
        }

        // A data directory with no accounts would lock everyone out, so an
        // empty user file gets the configured administrator.
        if store.users.is_empty() {
            let username = runtime_config.seed_admin_username.clone();
            store.users.insert(User {
                id: 0,
                username: username.clone(),
                password: runtime_config.seed_admin_password.clone(),
                role: Role::Admin,
            });
            gateway.save_all(&store)?;
            warn!("no user accounts found, seeded administrator '{}'", username);
        }

        let exporter = Arc::new(FileExporter::new(&runtime_config.export_dir));
        let state = AppState::new(runtime_config, store, gateway, exporter);
        Ok(Self { state })
    }
}
