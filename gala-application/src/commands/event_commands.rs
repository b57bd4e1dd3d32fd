use tracing::info;

use gala_domain::ledger;
use gala_domain::{AttendeeId, Event, EventId, EventStatus};

use crate::dtos::{EventUpdate, NewEvent};
use crate::validation::{
    parse_date, parse_time, validate_event_name, validate_free_text, validate_required_text,
};
use crate::{AppError, AppState};

pub fn create_event(state: &AppState, new: NewEvent) -> Result<EventId, AppError> {
    state.require_admin()?;
    let event = Event {
        id: 0,
        name: validate_event_name(&new.name)?,
        date: parse_date(&new.date)?,
        time: parse_time(&new.time)?,
        location: validate_required_text("location", &new.location)?,
        description: validate_free_text("description", &new.description)?,
        category: validate_required_text("category", &new.category)?,
        status: EventStatus::Upcoming,
        attendee_ids: Vec::new(),
        allocated_inventory: Default::default(),
    };
    let name = event.name.clone();
    let id = state.store.borrow_mut().events.insert(event);
    state.persist()?;
    info!("created event '{}' (id {})", name, id);
    Ok(id)
}

/// Applies only the fields the caller supplied; everything is validated
/// before the event is touched, so a bad field leaves it unchanged.
pub fn update_event(state: &AppState, event_id: EventId, update: EventUpdate) -> Result<(), AppError> {
    state.require_admin()?;
    let name = update.name.as_deref().map(validate_event_name).transpose()?;
    let date = update.date.as_deref().map(parse_date).transpose()?;
    let time = update.time.as_deref().map(parse_time).transpose()?;
    let location = update
        .location
        .as_deref()
        .map(|raw| validate_required_text("location", raw))
        .transpose()?;
    let description = update
        .description
        .as_deref()
        .map(|raw| validate_free_text("description", raw))
        .transpose()?;
    let category = update
        .category
        .as_deref()
        .map(|raw| validate_required_text("category", raw))
        .transpose()?;
    let status = update
        .status
        .as_deref()
        .map(|raw| {
            EventStatus::from_name(raw)
                .ok_or_else(|| AppError::Validation(format!("unknown status '{}'", raw.trim())))
        })
        .transpose()?;

    {
        let mut store = state.store.borrow_mut();
        let event = store
            .events
            .get_mut(event_id)
            .ok_or_else(|| AppError::NotFound(format!("no event with id {}", event_id)))?;
        if let Some(name) = name {
            event.name = name;
        }
        if let Some(date) = date {
            event.date = date;
        }
        if let Some(time) = time {
            event.time = time;
        }
        if let Some(location) = location {
            event.location = location;
        }
        if let Some(description) = description {
            event.description = description;
        }
        if let Some(category) = category {
            event.category = category;
        }
        if let Some(status) = status {
            event.status = status;
        }
    }
    state.persist()?;
    Ok(())
}

/// Cascade order matters: allocations go back to each item's pool and the
/// event's attendee profiles are dropped before the event itself.
pub fn delete_event(state: &AppState, event_id: EventId) -> Result<(), AppError> {
    state.require_admin()?;
    let name = {
        let mut store = state.store.borrow_mut();
        let store = &mut *store;
        let mut event = store
            .events
            .remove(event_id)
            .ok_or_else(|| AppError::NotFound(format!("no event with id {}", event_id)))?;
        ledger::release_event(&mut event, &mut store.inventory);

        let orphaned: Vec<AttendeeId> = store
            .attendees
            .iter()
            .filter(|attendee| attendee.registered_event_id == Some(event_id))
            .map(|attendee| attendee.id)
            .collect();
        for attendee_id in orphaned {
            store.attendees.remove(attendee_id);
        }
        event.name
    };
    state.persist()?;
    info!("deleted event '{}' (id {})", name, event_id);
    Ok(())
}
