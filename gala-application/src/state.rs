use std::cell::RefCell;
use std::sync::Arc;

use gala_domain::ports::{ExportService, StorageGateway};
use gala_domain::EntityStore;

use crate::{AppError, Session};

/// Settings the running application actually consumes, produced from the
/// infrastructure config after path resolution and validation.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub data_dir: String,
    pub export_dir: String,
    pub log_dir: String,
    pub history_file: String,
    /// 0 means unlimited.
    pub max_attendees_per_event: u32,
    pub seed_admin_username: String,
    pub seed_admin_password: String,
}

/// Everything the menu loop needs. The program is single-threaded (the only
/// blocking point is interactive input), so interior mutability is RefCell,
/// not a lock.
pub struct AppState {
    pub config: RuntimeConfig,
    pub store: RefCell<EntityStore>,
    pub gateway: Arc<dyn StorageGateway>,
    pub exports: Arc<dyn ExportService>,
    pub session: RefCell<Option<Session>>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        store: EntityStore,
        gateway: Arc<dyn StorageGateway>,
        exports: Arc<dyn ExportService>,
    ) -> Self {
        Self {
            config,
            store: RefCell::new(store),
            gateway,
            exports,
            session: RefCell::new(None),
        }
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn require_session(&self) -> Result<Session, AppError> {
        self.current_session()
            .ok_or_else(|| AppError::Auth("no user is logged in".to_string()))
    }

    pub fn require_admin(&self) -> Result<Session, AppError> {
        let session = self.require_session()?;
        if !session.is_admin() {
            return Err(AppError::Auth(
                "administrator privileges required".to_string(),
            ));
        }
        Ok(session)
    }

    /// Rewrites all four record files from the current store. Commands call
    /// this after every successful mutation; there is no partial save.
    pub fn persist(&self) -> Result<(), AppError> {
        let store = self.store.borrow();
        self.gateway.save_all(&store)?;
        Ok(())
    }
}
