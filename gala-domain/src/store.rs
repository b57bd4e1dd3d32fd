// Entity store
// Four independently keyed collections with per-type id counters

use std::collections::BTreeMap;

use crate::entities::{Attendee, Event, InventoryItem, User};
use crate::value_objects::ItemId;

/// Anything the store can own: has a numeric id, 0 meaning "not yet
/// assigned".
pub trait Entity {
    fn id(&self) -> u32;
    fn assign_id(&mut self, id: u32);
}

impl Entity for User {
    fn id(&self) -> u32 {
        self.id
    }
    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Entity for Event {
    fn id(&self) -> u32 {
        self.id
    }
    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Entity for Attendee {
    fn id(&self) -> u32 {
        self.id
    }
    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> u32 {
        self.id
    }
    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Ordered collection with a strictly increasing id counter. Ids are never
/// reused, even after a delete.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
    next_id: u32,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity, assigning the next id when the entity carries
    /// id 0. Returns the id under which it was stored. An explicit nonzero
    /// id is kept as-is and the counter advances past it, so loading
    /// persisted records bootstraps the counter to `max(ids) + 1`.
    pub fn insert(&mut self, mut item: T) -> u32 {
        if item.id() == 0 {
            item.assign_id(self.next_id);
        }
        self.next_id = self.next_id.max(item.id().saturating_add(1));
        let id = item.id();
        self.items.push(item);
        id
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn remove(&mut self, id: u32) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}

/// Decoded records as read from persistence, before counter bootstrap.
#[derive(Debug, Clone, Default)]
pub struct RecordSets {
    pub users: Vec<User>,
    pub events: Vec<Event>,
    pub attendees: Vec<Attendee>,
    pub inventory: Vec<InventoryItem>,
}

/// Owns all four entity collections. Events reference attendees and
/// inventory only by id; every lookup that needs a name goes through here.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub users: Collection<User>,
    pub events: Collection<Event>,
    pub attendees: Collection<Attendee>,
    pub inventory: Collection<InventoryItem>,
}

impl EntityStore {
    /// Builds a store from loaded records, bootstrapping every id counter
    /// to one past the highest persisted id.
    pub fn from_records(records: RecordSets) -> Self {
        let mut store = Self::default();
        for user in records.users {
            store.users.insert(user);
        }
        for event in records.events {
            store.events.insert(event);
        }
        for attendee in records.attendees {
            store.attendees.insert(attendee);
        }
        for item in records.inventory {
            store.inventory.insert(item);
        }
        store
    }

    /// Case-sensitive, usernames are unique.
    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    /// Case-insensitive, item names are soft-unique.
    pub fn find_item_by_name(&self, name: &str) -> Option<&InventoryItem> {
        self.inventory
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Best-effort referential checks run after load. Dangling attendee ids
    /// and allocation drift are reported, never fatal; files edited by hand
    /// are the usual cause.
    pub fn integrity_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for event in self.events.iter() {
            for attendee_id in &event.attendee_ids {
                if self.attendees.get(*attendee_id).is_none() {
                    warnings.push(format!(
                        "event {} '{}' references attendee {} with no profile",
                        event.id, event.name, attendee_id
                    ));
                }
            }
        }

        let mut allocated_by_item: BTreeMap<ItemId, u32> = BTreeMap::new();
        for event in self.events.iter() {
            for (item_id, quantity) in &event.allocated_inventory {
                if self.inventory.get(*item_id).is_none() {
                    warnings.push(format!(
                        "event {} '{}' allocates unknown item {}",
                        event.id, event.name, item_id
                    ));
                }
                *allocated_by_item.entry(*item_id).or_insert(0) += quantity;
            }
        }
        for item in self.inventory.iter() {
            let expected = allocated_by_item.get(&item.id).copied().unwrap_or(0);
            if expected != item.allocated_quantity {
                warnings.push(format!(
                    "item {} '{}' records {} allocated but events hold {}",
                    item.id, item.name, item.allocated_quantity, expected
                ));
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{EventStatus, Role};
    use chrono::{NaiveDate, NaiveTime};

    fn user(id: u32, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            password: "secret1".to_string(),
            role: Role::RegularUser,
        }
    }

    fn event(id: u32, name: &str) -> Event {
        Event {
            id,
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
            time: NaiveTime::from_hms_opt(18, 30, 0).expect("valid time"),
            location: "Hall A".to_string(),
            description: String::new(),
            category: "General".to_string(),
            status: EventStatus::Upcoming,
            attendee_ids: Vec::new(),
            allocated_inventory: BTreeMap::new(),
        }
    }

    fn item(id: u32, name: &str, total: u32, allocated: u32) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_string(),
            total_quantity: total,
            allocated_quantity: allocated,
            description: String::new(),
        }
    }

    #[test]
    fn empty_collection_starts_ids_at_one() {
        let mut users = Collection::new();
        let id = users.insert(user(0, "alice"));
        assert_eq!(id, 1);
        assert_eq!(users.insert(user(0, "bob")), 2);
    }

    #[test]
    fn counter_bootstraps_to_max_plus_one() {
        let records = RecordSets {
            users: vec![user(5, "alice"), user(2, "bob")],
            ..RecordSets::default()
        };
        let mut store = EntityStore::from_records(records);
        assert_eq!(store.users.next_id(), 6);
        assert_eq!(store.users.insert(user(0, "carol")), 6);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut users = Collection::new();
        let first = users.insert(user(0, "alice"));
        users.remove(first).expect("remove inserted user");
        let second = users.insert(user(0, "bob"));
        assert_ne!(first, second);
        assert_eq!(second, 2);
    }

    #[test]
    fn explicit_id_insert_advances_counter() {
        let mut attendees = Collection::new();
        attendees.insert(Attendee {
            id: 9,
            name: "Dana".to_string(),
            contact_info: "dana@example.com".to_string(),
            registered_event_id: None,
            checked_in: false,
        });
        assert_eq!(attendees.next_id(), 10);
    }

    #[test]
    fn username_lookup_is_case_sensitive() {
        let mut store = EntityStore::default();
        store.users.insert(user(0, "Alice"));
        assert!(store.find_user_by_username("Alice").is_some());
        assert!(store.find_user_by_username("alice").is_none());
    }

    #[test]
    fn item_name_lookup_is_case_insensitive() {
        let mut store = EntityStore::default();
        store.inventory.insert(item(0, "Chairs", 10, 0));
        assert!(store.find_item_by_name("chairs").is_some());
        assert!(store.find_item_by_name("CHAIRS").is_some());
        assert!(store.find_item_by_name("tables").is_none());
    }

    #[test]
    fn integrity_warnings_flag_dangling_refs_and_drift() {
        let mut store = EntityStore::default();
        let mut ev = event(0, "Gala Night");
        ev.attendee_ids.push(42);
        ev.allocated_inventory.insert(7, 5);
        store.events.insert(ev);
        store.inventory.insert(item(7, "Chairs", 10, 3));

        let warnings = store.integrity_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("attendee 42"));
        assert!(warnings[1].contains("records 3 allocated but events hold 5"));
    }

    #[test]
    fn clean_store_yields_no_warnings() {
        let mut store = EntityStore::default();
        let mut ev = event(0, "Gala Night");
        ev.allocated_inventory.insert(7, 5);
        store.events.insert(ev);
        store.inventory.insert(item(7, "Chairs", 10, 5));
        assert!(store.integrity_warnings().is_empty());
    }
}
