// Flat-file persistence gateway

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use gala_domain::{EntityStore, RecordSets, StorageGateway};

use crate::codec::Record;

const USERS_FILE: &str = "users.txt";
const EVENTS_FILE: &str = "events.txt";
const ATTENDEES_FILE: &str = "attendees.txt";
const INVENTORY_FILE: &str = "inventory.txt";

/// Stores each entity collection as one line-oriented text file under a
/// data directory. Files are rewritten whole on save; a missing file
/// loads as an empty collection so first runs need no setup.
pub struct FlatFileStore {
    data_dir: PathBuf,
}

impl FlatFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Loads every decodable record from one file. Undecodable lines
    /// are logged with their line number and skipped so one bad edit
    /// does not take the rest of the file down with it.
    fn load_records<T: Record>(&self, name: &str) -> anyhow::Result<Vec<T>> {
        let path = self.file_path(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        let mut records = Vec::new();
        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            match T::decode(line) {
                Ok(record) => records.push(record),
                Err(err) => warn!("skipping {}:{}: {}", name, index + 1, err),
            }
        }
        Ok(records)
    }

    fn save_records<'a, T, I>(&self, name: &str, records: I) -> anyhow::Result<()>
    where
        T: Record + 'a,
        I: Iterator<Item = &'a T>,
    {
        let mut content = String::new();
        for record in records {
            content.push_str(&record.encode());
            content.push('\n');
        }
        fs::write(self.file_path(name), content)?;
        Ok(())
    }

    fn ensure_data_dir(&self) -> anyhow::Result<()> {
        let dir: &Path = &self.data_dir;
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl StorageGateway for FlatFileStore {
    fn load_all(&self) -> anyhow::Result<RecordSets> {
        Ok(RecordSets {
            users: self.load_records(USERS_FILE)?,
            events: self.load_records(EVENTS_FILE)?,
            attendees: self.load_records(ATTENDEES_FILE)?,
            inventory: self.load_records(INVENTORY_FILE)?,
        })
    }

    fn save_all(&self, store: &EntityStore) -> anyhow::Result<()> {
        self.ensure_data_dir()?;
        self.save_records(USERS_FILE, store.users.iter())?;
        self.save_records(EVENTS_FILE, store.events.iter())?;
        self.save_records(ATTENDEES_FILE, store.attendees.iter())?;
        self.save_records(INVENTORY_FILE, store.inventory.iter())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gala_domain::{Role, User};

    use super::*;

    #[test]
    fn missing_files_load_as_empty_sets() {
        let dir = tempfile::tempdir().expect("temp dir");
        let gateway = FlatFileStore::new(dir.path());
        let records = gateway.load_all().expect("load succeeds");
        assert!(records.users.is_empty());
        assert!(records.events.is_empty());
        assert!(records.attendees.is_empty());
        assert!(records.inventory.is_empty());
    }

    #[test]
    fn save_and_load_round_trip_the_store() {
        let dir = tempfile::tempdir().expect("temp dir");
        let gateway = FlatFileStore::new(dir.path());

        let mut store = EntityStore::default();
        store.users.insert(User {
            id: 0,
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
        });
        store.users.insert(User {
            id: 0,
            username: "alice".to_string(),
            password: "secret1".to_string(),
            role: Role::RegularUser,
        });
        gateway.save_all(&store).expect("save succeeds");

        let records = gateway.load_all().expect("load succeeds");
        assert_eq!(records.users.len(), 2);
        assert_eq!(records.users[1].username, "alice");
        assert_eq!(records.users[1].role, Role::RegularUser);
    }

    #[test]
    fn undecodable_lines_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(USERS_FILE),
            "1,admin,admin123,0\nnot a record\n2,alice,secret1,1\n",
        )
        .expect("write file");

        let gateway = FlatFileStore::new(dir.path());
        let records = gateway.load_all().expect("load succeeds");
        assert_eq!(records.users.len(), 2);
        assert_eq!(records.users[0].username, "admin");
        assert_eq!(records.users[1].username, "alice");
    }

    #[test]
    fn blank_lines_and_crlf_endings_are_tolerated() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(USERS_FILE),
            "1,admin,admin123,0\r\n\r\n2,alice,secret1,1\r\n",
        )
        .expect("write file");

        let gateway = FlatFileStore::new(dir.path());
        let records = gateway.load_all().expect("load succeeds");
        assert_eq!(records.users.len(), 2);
        assert_eq!(records.users[1].role, Role::RegularUser);
    }

    #[test]
    fn save_creates_the_data_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("data");
        let gateway = FlatFileStore::new(&nested);
        gateway.save_all(&EntityStore::default()).expect("save succeeds");
        assert!(nested.join(USERS_FILE).exists());
        assert!(nested.join(INVENTORY_FILE).exists());
    }
}
