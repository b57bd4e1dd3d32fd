// Attendee entity
// A self-registered attendee reuses the registering user's id

use serde::{Deserialize, Serialize};

use crate::value_objects::{AttendeeId, EventId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: AttendeeId,
    pub name: String,
    pub contact_info: String,
    /// The single event this profile was registered for, if any. Membership
    /// in further events lives on `Event::attendee_ids`.
    pub registered_event_id: Option<EventId>,
    pub checked_in: bool,
}
