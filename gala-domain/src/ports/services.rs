use std::path::PathBuf;

use crate::store::EntityStore;
use crate::value_objects::EventId;

/// Writes human-readable snapshots of the store to files. Implemented
/// by the infrastructure layer; each method returns the written path.
pub trait ExportService: Send + Sync {
    /// Attendee sheet for one event. The caller has already checked
    /// that the event exists.
    fn export_event_attendees(&self, store: &EntityStore, event_id: EventId)
        -> anyhow::Result<PathBuf>;

    /// Every event with resolved attendee and inventory names.
    fn export_events(&self, store: &EntityStore) -> anyhow::Result<PathBuf>;

    /// The inventory with per-event allocation breakdowns.
    fn export_inventory(&self, store: &EntityStore) -> anyhow::Result<PathBuf>;
}
