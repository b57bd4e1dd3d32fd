// Export commands

use std::path::PathBuf;

use tracing::info;

use gala_domain::EventId;

use crate::{AppError, AppState};

/// Writes the attendee sheet for one event through the export port.
pub fn export_event_attendees(state: &AppState, event_id: EventId) -> Result<PathBuf, AppError> {
    state.require_admin()?;
    let store = state.store.borrow();
    if store.events.get(event_id).is_none() {
        return Err(AppError::NotFound(format!("no event with id {}", event_id)));
    }
    let path = state.exports.export_event_attendees(&store, event_id)?;
    info!(event_id, path = %path.display(), "exported attendee sheet");
    Ok(path)
}

pub fn export_events(state: &AppState) -> Result<PathBuf, AppError> {
    state.require_admin()?;
    let store = state.store.borrow();
    let path = state.exports.export_events(&store)?;
    info!(path = %path.display(), "exported events");
    Ok(path)
}

pub fn export_inventory(state: &AppState) -> Result<PathBuf, AppError> {
    state.require_admin()?;
    let store = state.store.borrow();
    let path = state.exports.export_inventory(&store)?;
    info!(path = %path.display(), "exported inventory");
    Ok(path)
}
