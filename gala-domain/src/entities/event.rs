// Event entity
// References attendees and inventory by numeric id, never by embedded copy

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::value_objects::{AttendeeId, EventId, EventStatus, ItemId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
    pub category: String,
    pub status: EventStatus,
    /// Ordered, no duplicates. Ids may lack a matching attendee profile;
    /// readers render those as "Unknown" instead of failing.
    pub attendee_ids: Vec<AttendeeId>,
    /// Per-event share of each item's global allocated quantity.
    pub allocated_inventory: BTreeMap<ItemId, u32>,
}

impl Event {
    pub fn has_attendee(&self, attendee_id: AttendeeId) -> bool {
        self.attendee_ids.contains(&attendee_id)
    }

    pub fn allocation_of(&self, item_id: ItemId) -> u32 {
        self.allocated_inventory.get(&item_id).copied().unwrap_or(0)
    }
}
