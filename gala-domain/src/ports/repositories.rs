use crate::store::{EntityStore, RecordSets};

/// The only I/O boundary. One file per entity type behind it; a missing
/// file reads as zero records, and save rewrites every file in full.
pub trait StorageGateway: Send + Sync {
    fn load_all(&self) -> anyhow::Result<RecordSets>;
    fn save_all(&self, store: &EntityStore) -> anyhow::Result<()>;
}
