use gala_domain::{AttendeeId, Event, EventId};

use crate::{AppError, AppState};

pub fn list_events(state: &AppState) -> Vec<Event> {
    state.store.borrow().events.iter().cloned().collect()
}

pub fn find_event(state: &AppState, event_id: EventId) -> Result<Event, AppError> {
    state
        .store
        .borrow()
        .events
        .get(event_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no event with id {}", event_id)))
}

/// Case-insensitive substring match on the name, or an exact date match.
/// An empty term lists everything.
pub fn search_events(state: &AppState, term: &str) -> Vec<Event> {
    let needle = term.trim().to_lowercase();
    state
        .store
        .borrow()
        .events
        .iter()
        .filter(|event| {
            needle.is_empty()
                || event.name.to_lowercase().contains(&needle)
                || event.date.to_string() == needle
        })
        .cloned()
        .collect()
}

pub fn events_for_attendee(state: &AppState, attendee_id: AttendeeId) -> Vec<Event> {
    state
        .store
        .borrow()
        .events
        .iter()
        .filter(|event| event.has_attendee(attendee_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::event_commands;
    use crate::dtos::NewEvent;
    use crate::test_support::{login_as_admin, test_state};

    fn seed(state: &AppState, name: &str, date: &str) -> EventId {
        event_commands::create_event(
            state,
            NewEvent {
                name: name.to_string(),
                date: date.to_string(),
                time: "19:00".to_string(),
                location: "Hall A".to_string(),
                description: String::new(),
                category: "General".to_string(),
            },
        )
        .expect("create event")
    }

    #[test]
    fn search_matches_name_substring_case_insensitively() {
        let state = test_state();
        login_as_admin(&state);
        seed(&state, "Gala Night", "2025-06-01");
        seed(&state, "Tech Meetup", "2025-07-15");

        let hits = search_events(&state, "gala");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Gala Night");
    }

    #[test]
    fn search_matches_exact_date() {
        let state = test_state();
        login_as_admin(&state);
        seed(&state, "Gala Night", "2025-06-01");
        seed(&state, "Tech Meetup", "2025-07-15");

        let hits = search_events(&state, "2025-07-15");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Tech Meetup");

        assert!(search_events(&state, "2025-07").is_empty());
    }

    #[test]
    fn empty_term_lists_everything() {
        let state = test_state();
        login_as_admin(&state);
        seed(&state, "Gala Night", "2025-06-01");
        seed(&state, "Tech Meetup", "2025-07-15");
        assert_eq!(search_events(&state, "  ").len(), 2);
    }

    #[test]
    fn events_for_attendee_follows_membership() {
        let state = test_state();
        login_as_admin(&state);
        let first = seed(&state, "Gala Night", "2025-06-01");
        seed(&state, "Tech Meetup", "2025-07-15");
        state
            .store
            .borrow_mut()
            .events
            .get_mut(first)
            .expect("event")
            .attendee_ids
            .push(42);

        let events = events_for_attendee(&state, 42);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, first);
    }
}
