use tracing::info;

use gala_domain::{Attendee, AttendeeId, Event, EventId};

use crate::validation::validate_required_text;
use crate::{AppError, AppState};

/// Admin registration creates one profile per (person, event) pair, so the
/// duplicate check is name plus event, case-insensitive on the name.
pub fn register_attendee(
    state: &AppState,
    event_id: EventId,
    name: &str,
    contact_info: &str,
) -> Result<AttendeeId, AppError> {
    state.require_admin()?;
    let name = validate_required_text("attendee name", name)?;
    let contact_info = validate_required_text("contact info", contact_info)?;

    let id = {
        let mut store = state.store.borrow_mut();
        let store = &mut *store;
        let event = store
            .events
            .get(event_id)
            .ok_or_else(|| AppError::NotFound(format!("no event with id {}", event_id)))?;
        ensure_capacity(state, event)?;
        let duplicate = store.attendees.iter().any(|attendee| {
            attendee.registered_event_id == Some(event_id)
                && attendee.name.eq_ignore_ascii_case(&name)
        });
        if duplicate {
            return Err(AppError::Validation(format!(
                "'{}' is already registered for this event",
                name
            )));
        }

        let id = store.attendees.insert(Attendee {
            id: 0,
            name: name.clone(),
            contact_info,
            registered_event_id: Some(event_id),
            checked_in: false,
        });
        // Membership lives on the event; the profile field only records
        // which registration created it.
        if let Some(event) = store.events.get_mut(event_id) {
            event.attendee_ids.push(id);
        }
        id
    };
    state.persist()?;
    info!("registered attendee '{}' (id {}) for event {}", name, id, event_id);
    Ok(id)
}

/// Self-service registration. The attendee profile reuses the user's id,
/// so one profile serves every event the user joins; per-event membership
/// is the event's attendee list.
pub fn register_for_event(
    state: &AppState,
    event_id: EventId,
    contact_info: &str,
) -> Result<AttendeeId, AppError> {
    let session = state.require_session()?;
    let contact = match contact_info.trim() {
        "" => None,
        trimmed => Some(validate_required_text("contact info", trimmed)?),
    };

    {
        let mut store = state.store.borrow_mut();
        let store = &mut *store;
        let event = store
            .events
            .get(event_id)
            .ok_or_else(|| AppError::NotFound(format!("no event with id {}", event_id)))?;
        if event.has_attendee(session.user_id) {
            return Err(AppError::Validation(
                "you are already registered for this event".to_string(),
            ));
        }
        ensure_capacity(state, event)?;

        match store.attendees.get_mut(session.user_id) {
            Some(profile) => {
                if profile.registered_event_id.is_none() {
                    profile.registered_event_id = Some(event_id);
                }
                if let Some(contact) = contact {
                    profile.contact_info = contact;
                }
            }
            None => {
                let contact = contact.ok_or_else(|| {
                    AppError::Validation("contact info must not be empty".to_string())
                })?;
                store.attendees.insert(Attendee {
                    id: session.user_id,
                    name: session.username.clone(),
                    contact_info: contact,
                    registered_event_id: Some(event_id),
                    checked_in: false,
                });
            }
        }
        if let Some(event) = store.events.get_mut(event_id) {
            event.attendee_ids.push(session.user_id);
        }
    }
    state.persist()?;
    info!(
        "user '{}' registered for event {}",
        session.username, event_id
    );
    Ok(session.user_id)
}

/// Drops the caller's membership. When the canceled event is the one the
/// profile was registered for, the profile detaches and its check-in
/// resets; this is the only path that ever clears `checked_in`.
pub fn cancel_registration(state: &AppState, event_id: EventId) -> Result<(), AppError> {
    let session = state.require_session()?;

    {
        let mut store = state.store.borrow_mut();
        let store = &mut *store;
        let event = store
            .events
            .get_mut(event_id)
            .ok_or_else(|| AppError::NotFound(format!("no event with id {}", event_id)))?;
        let before = event.attendee_ids.len();
        event.attendee_ids.retain(|id| *id != session.user_id);
        if event.attendee_ids.len() == before {
            return Err(AppError::NotFound(
                "you are not registered for this event".to_string(),
            ));
        }
        if let Some(profile) = store.attendees.get_mut(session.user_id) {
            if profile.registered_event_id == Some(event_id) {
                profile.registered_event_id = None;
                profile.checked_in = false;
            }
        }
    }
    state.persist()?;
    info!(
        "user '{}' canceled registration for event {}",
        session.username, event_id
    );
    Ok(())
}

/// Check-in is monotone. Returns false when the attendee was already
/// checked in; callers report that rather than treating it as an error.
pub fn check_in_attendee(state: &AppState, attendee_id: AttendeeId) -> Result<bool, AppError> {
    state.require_admin()?;
    let newly_checked = {
        let mut store = state.store.borrow_mut();
        let profile = store
            .attendees
            .get_mut(attendee_id)
            .ok_or_else(|| AppError::NotFound(format!("no attendee with id {}", attendee_id)))?;
        if profile.checked_in {
            false
        } else {
            profile.checked_in = true;
            true
        }
    };
    if newly_checked {
        state.persist()?;
        info!("checked in attendee {}", attendee_id);
    }
    Ok(newly_checked)
}

/// Admins may update anyone; a regular user only their own profile.
pub fn update_attendee_contact(
    state: &AppState,
    attendee_id: AttendeeId,
    contact_info: &str,
) -> Result<(), AppError> {
    let session = state.require_session()?;
    if !session.is_admin() && session.user_id != attendee_id {
        return Err(AppError::Auth(
            "only administrators may edit other attendees".to_string(),
        ));
    }
    let contact_info = validate_required_text("contact info", contact_info)?;

    {
        let mut store = state.store.borrow_mut();
        let profile = store
            .attendees
            .get_mut(attendee_id)
            .ok_or_else(|| AppError::NotFound(format!("no attendee with id {}", attendee_id)))?;
        profile.contact_info = contact_info;
    }
    state.persist()?;
    Ok(())
}

fn ensure_capacity(state: &AppState, event: &Event) -> Result<(), AppError> {
    let max = state.config.max_attendees_per_event;
    if max > 0 && event.attendee_ids.len() >= max as usize {
        return Err(AppError::Capacity(format!(
            "event '{}' is full ({} attendees)",
            event.name, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::event_commands;
    use crate::dtos::NewEvent;
    use crate::test_support::{
        login_as_admin, login_as_user, test_config, test_state, NullExporter, NullGateway,
    };
    use gala_domain::EntityStore;
    use std::sync::Arc;

    fn state_with_event() -> (AppState, EventId) {
        let state = test_state();
        login_as_admin(&state);
        let event_id = event_commands::create_event(
            &state,
            NewEvent {
                name: "Gala Night".to_string(),
                date: "2025-06-01".to_string(),
                time: "19:00".to_string(),
                location: "Hall A".to_string(),
                description: String::new(),
                category: "General".to_string(),
            },
        )
        .expect("create event");
        (state, event_id)
    }

    #[test]
    fn admin_registration_links_profile_and_event() {
        let (state, event_id) = state_with_event();
        let id = register_attendee(&state, event_id, "Dana", "dana@example.com")
            .expect("register attendee");

        let store = state.store.borrow();
        let profile = store.attendees.get(id).expect("profile");
        assert_eq!(profile.registered_event_id, Some(event_id));
        assert!(!profile.checked_in);
        assert!(store.events.get(event_id).expect("event").has_attendee(id));
    }

    #[test]
    fn duplicate_name_for_same_event_is_refused() {
        let (state, event_id) = state_with_event();
        register_attendee(&state, event_id, "Dana", "dana@example.com").expect("first");
        let err = register_attendee(&state, event_id, "dana", "other@example.com")
            .expect_err("case-insensitive duplicate");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn capacity_limit_is_enforced_when_configured() {
        let mut config = test_config();
        config.max_attendees_per_event = 1;
        let state = AppState::new(
            config,
            EntityStore::default(),
            Arc::new(NullGateway),
            Arc::new(NullExporter),
        );
        login_as_admin(&state);
        let event_id = event_commands::create_event(
            &state,
            NewEvent {
                name: "Tiny Meetup".to_string(),
                date: "2025-06-01".to_string(),
                time: "19:00".to_string(),
                location: "Room 1".to_string(),
                description: String::new(),
                category: "General".to_string(),
            },
        )
        .expect("create event");

        register_attendee(&state, event_id, "Dana", "dana@example.com").expect("first seat");
        let err = register_attendee(&state, event_id, "Eve", "eve@example.com")
            .expect_err("event full");
        assert!(matches!(err, AppError::Capacity(_)));
    }

    #[test]
    fn self_registration_reuses_the_user_id() {
        let (state, event_id) = state_with_event();
        login_as_user(&state, "alice");
        let session = state.current_session().expect("session");

        let id = register_for_event(&state, event_id, "alice@example.com").expect("register");
        assert_eq!(id, session.user_id);

        let store = state.store.borrow();
        let profile = store.attendees.get(id).expect("profile");
        assert_eq!(profile.name, "alice");
        assert!(store.events.get(event_id).expect("event").has_attendee(id));

        drop(store);
        let err = register_for_event(&state, event_id, "").expect_err("already registered");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn cancel_resets_check_in_and_membership() {
        let (state, event_id) = state_with_event();
        login_as_user(&state, "alice");
        let id = register_for_event(&state, event_id, "alice@example.com").expect("register");

        login_as_admin_again(&state);
        assert!(check_in_attendee(&state, id).expect("check in"));

        crate::commands::auth_commands::login(&state, "alice", "secret1").expect("relogin");
        cancel_registration(&state, event_id).expect("cancel");

        let store = state.store.borrow();
        assert!(!store.events.get(event_id).expect("event").has_attendee(id));
        let profile = store.attendees.get(id).expect("profile survives");
        assert!(!profile.checked_in);
        assert_eq!(profile.registered_event_id, None);
    }

    fn login_as_admin_again(state: &AppState) {
        crate::commands::auth_commands::login(state, "admin", "admin123").expect("admin login");
    }

    #[test]
    fn check_in_is_monotone() {
        let (state, event_id) = state_with_event();
        let id = register_attendee(&state, event_id, "Dana", "dana@example.com").expect("register");

        assert!(check_in_attendee(&state, id).expect("first check-in"));
        assert!(!check_in_attendee(&state, id).expect("second is a no-op"));
        assert!(state.store.borrow().attendees.get(id).expect("profile").checked_in);
    }

    #[test]
    fn contact_updates_respect_ownership() {
        let (state, event_id) = state_with_event();
        login_as_user(&state, "alice");
        let own_id = register_for_event(&state, event_id, "alice@example.com").expect("register");

        update_attendee_contact(&state, own_id, "new@example.com").expect("own profile");
        assert_eq!(
            state
                .store
                .borrow()
                .attendees
                .get(own_id)
                .expect("profile")
                .contact_info,
            "new@example.com"
        );

        let err = update_attendee_contact(&state, own_id + 1, "x@example.com")
            .expect_err("someone else's profile");
        assert!(matches!(err, AppError::Auth(_)));
    }
}
