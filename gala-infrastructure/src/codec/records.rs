// Per-entity record encoding

use chrono::{NaiveDate, NaiveTime};
use gala_domain::{Attendee, Event, EventStatus, InventoryItem, Role, User};

use super::{
    join_allocations, join_id_list, parse_allocations, parse_id_list, parse_number, split_fields,
    DecodeError,
};

/// One line in a flat file. Encoding is infallible; decoding reports
/// why a line is unusable so the gateway can skip it.
pub trait Record: Sized {
    /// Comma-separated fields per encoded line.
    const FIELDS: usize;

    fn encode(&self) -> String;
    fn decode(line: &str) -> Result<Self, DecodeError>;
}

impl Record for User {
    const FIELDS: usize = 4;

    fn encode(&self) -> String {
        format!(
            "{},{},{},{}",
            self.id,
            self.username,
            self.password,
            self.role.ordinal()
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, Self::FIELDS)?;
        let ordinal = parse_number("role", fields[3])?;
        let role = Role::from_ordinal(ordinal).ok_or(DecodeError::InvalidOrdinal {
            field: "role",
            ordinal,
        })?;
        Ok(User {
            id: parse_number("user id", fields[0])?,
            username: fields[1].to_string(),
            password: fields[2].to_string(),
            role,
        })
    }
}

impl Record for Event {
    const FIELDS: usize = 10;

    fn encode(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{}",
            self.id,
            self.name,
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            self.location,
            self.description,
            self.category,
            self.status.ordinal(),
            join_id_list(&self.attendee_ids),
            join_allocations(&self.allocated_inventory),
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, Self::FIELDS)?;
        let date =
            NaiveDate::parse_from_str(fields[2], "%Y-%m-%d").map_err(|_| DecodeError::InvalidDate {
                value: fields[2].to_string(),
            })?;
        let time =
            NaiveTime::parse_from_str(fields[3], "%H:%M").map_err(|_| DecodeError::InvalidTime {
                value: fields[3].to_string(),
            })?;
        let ordinal = parse_number("status", fields[7])?;
        let status = EventStatus::from_ordinal(ordinal).ok_or(DecodeError::InvalidOrdinal {
            field: "status",
            ordinal,
        })?;
        Ok(Event {
            id: parse_number("event id", fields[0])?,
            name: fields[1].to_string(),
            date,
            time,
            location: fields[4].to_string(),
            description: fields[5].to_string(),
            category: fields[6].to_string(),
            status,
            attendee_ids: parse_id_list("attendee id", fields[8])?,
            allocated_inventory: parse_allocations(fields[9])?,
        })
    }
}

impl Record for Attendee {
    const FIELDS: usize = 5;

    fn encode(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id,
            self.name,
            self.contact_info,
            self.registered_event_id.unwrap_or(0),
            u32::from(self.checked_in),
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, Self::FIELDS)?;
        let event_id = parse_number("registered event id", fields[3])?;
        Ok(Attendee {
            id: parse_number("attendee id", fields[0])?,
            name: fields[1].to_string(),
            contact_info: fields[2].to_string(),
            registered_event_id: (event_id != 0).then_some(event_id),
            // Anything other than "1" counts as not checked in.
            checked_in: fields[4] == "1",
        })
    }
}

impl Record for InventoryItem {
    const FIELDS: usize = 5;

    fn encode(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.name, self.total_quantity, self.allocated_quantity, self.description,
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, Self::FIELDS)?;
        Ok(InventoryItem {
            id: parse_number("item id", fields[0])?,
            name: fields[1].to_string(),
            total_quantity: parse_number("total quantity", fields[2])?,
            allocated_quantity: parse_number("allocated quantity", fields[3])?,
            description: fields[4].to_string(),
        })
    }
}
