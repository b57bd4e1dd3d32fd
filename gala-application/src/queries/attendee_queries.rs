use gala_domain::{Attendee, AttendeeId, EventId};

use crate::{AppError, AppState};

/// One line of the per-event attendee listing. Ids without a profile
/// render as "Unknown" rather than failing the whole view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeRow {
    pub id: AttendeeId,
    pub name: String,
    pub contact_info: String,
    pub checked_in: bool,
    pub has_profile: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub event_id: EventId,
    pub event_name: String,
    pub registered: usize,
    pub checked_in: usize,
}

pub fn list_attendees(state: &AppState) -> Vec<Attendee> {
    state.store.borrow().attendees.iter().cloned().collect()
}

pub fn find_attendee(state: &AppState, attendee_id: AttendeeId) -> Result<Attendee, AppError> {
    state
        .store
        .borrow()
        .attendees
        .get(attendee_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no attendee with id {}", attendee_id)))
}

pub fn attendees_for_event(
    state: &AppState,
    event_id: EventId,
) -> Result<Vec<AttendeeRow>, AppError> {
    let store = state.store.borrow();
    let event = store
        .events
        .get(event_id)
        .ok_or_else(|| AppError::NotFound(format!("no event with id {}", event_id)))?;

    let rows = event
        .attendee_ids
        .iter()
        .map(|id| match store.attendees.get(*id) {
            Some(profile) => AttendeeRow {
                id: *id,
                name: profile.name.clone(),
                contact_info: profile.contact_info.clone(),
                checked_in: profile.checked_in,
                has_profile: true,
            },
            None => AttendeeRow {
                id: *id,
                name: "Unknown".to_string(),
                contact_info: String::new(),
                checked_in: false,
                has_profile: false,
            },
        })
        .collect();
    Ok(rows)
}

/// Registered and checked-in counts per event. Membership is the event's
/// attendee list; a missing profile counts as not checked in.
pub fn attendance_report(state: &AppState) -> Vec<AttendanceRow> {
    let store = state.store.borrow();
    store
        .events
        .iter()
        .map(|event| {
            let checked_in = event
                .attendee_ids
                .iter()
                .filter(|id| {
                    store
                        .attendees
                        .get(**id)
                        .map(|profile| profile.checked_in)
                        .unwrap_or(false)
                })
                .count();
            AttendanceRow {
                event_id: event.id,
                event_name: event.name.clone(),
                registered: event.attendee_ids.len(),
                checked_in,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{attendee_commands, event_commands};
    use crate::dtos::NewEvent;
    use crate::test_support::{login_as_admin, test_state};

    fn seed_event(state: &AppState, name: &str) -> EventId {
        event_commands::create_event(
            state,
            NewEvent {
                name: name.to_string(),
                date: "2025-06-01".to_string(),
                time: "19:00".to_string(),
                location: "Hall A".to_string(),
                description: String::new(),
                category: "General".to_string(),
            },
        )
        .expect("create event")
    }

    #[test]
    fn listing_resolves_profiles_and_placeholders() {
        let state = test_state();
        login_as_admin(&state);
        let event_id = seed_event(&state, "Gala Night");
        let dana = attendee_commands::register_attendee(&state, event_id, "Dana", "dana@example.com")
            .expect("register");
        state
            .store
            .borrow_mut()
            .events
            .get_mut(event_id)
            .expect("event")
            .attendee_ids
            .push(999);

        let rows = attendees_for_event(&state, event_id).expect("rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, dana);
        assert_eq!(rows[0].name, "Dana");
        assert!(rows[0].has_profile);
        assert_eq!(rows[1].name, "Unknown");
        assert!(!rows[1].has_profile);
    }

    #[test]
    fn report_counts_registrations_and_check_ins() {
        let state = test_state();
        login_as_admin(&state);
        let event_id = seed_event(&state, "Gala Night");
        let dana = attendee_commands::register_attendee(&state, event_id, "Dana", "dana@example.com")
            .expect("dana");
        attendee_commands::register_attendee(&state, event_id, "Eve", "eve@example.com")
            .expect("eve");
        attendee_commands::check_in_attendee(&state, dana).expect("check in dana");

        let report = attendance_report(&state);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].event_name, "Gala Night");
        assert_eq!(report[0].registered, 2);
        assert_eq!(report[0].checked_in, 1);
    }

    #[test]
    fn missing_event_is_not_found() {
        let state = test_state();
        login_as_admin(&state);
        assert!(matches!(
            attendees_for_event(&state, 5),
            Err(AppError::NotFound(_))
        ));
    }
}
