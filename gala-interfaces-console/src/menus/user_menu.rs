// Regular user menu

use gala_application::commands::{attendee_commands, auth_commands};
use gala_application::queries::event_queries;
use gala_application::AppState;
use gala_domain::AttendeeId;

use crate::error::ConsoleError;
use crate::menus::{menu_choice, settle, Flow};
use crate::prompts::Prompter;
use crate::render;

pub fn run(state: &AppState, prompter: &mut Prompter) -> Result<Flow, ConsoleError> {
    let session = match state.current_session() {
        Some(session) => session,
        None => return Ok(Flow::Continue),
    };
    print_menu(&session.username);
    let choice = match menu_choice(prompter, 6)? {
        Some(choice) => choice,
        None => return Ok(Flow::Exit),
    };
    if choice == 0 {
        auth_commands::logout(state);
        println!("Logged out.");
        return Ok(Flow::Continue);
    }
    let result = match choice {
        1 => view_events(state),
        2 => search_events(state, prompter),
        3 => register_for_event(state, prompter),
        4 => my_registrations(state, session.user_id),
        5 => cancel_registration(state, prompter),
        6 => update_contact(state, prompter, session.user_id),
        _ => Ok(()),
    };
    settle(result)?;
    Ok(Flow::Continue)
}

fn print_menu(username: &str) {
    println!();
    println!("--- Menu ({}) ---", username);
    println!(" 1) View events");
    println!(" 2) Search events");
    println!(" 3) Register for an event");
    println!(" 4) My registrations");
    println!(" 5) Cancel a registration");
    println!(" 6) Update my contact info");
    println!(" 0) Log out");
}

fn view_events(state: &AppState) -> Result<(), ConsoleError> {
    render::print_events(&event_queries::list_events(state));
    Ok(())
}

fn search_events(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let term = prompter.read_line("Search by name or date (empty lists all): ")?;
    render::print_events(&event_queries::search_events(state, &term));
    Ok(())
}

fn register_for_event(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let event_id = prompter.read_u32("Event id: ")?;
    let contact = prompter.read_line("Contact info (empty keeps your current one): ")?;
    attendee_commands::register_for_event(state, event_id, &contact)?;
    println!("Registered for event {}.", event_id);
    Ok(())
}

fn my_registrations(state: &AppState, user_id: AttendeeId) -> Result<(), ConsoleError> {
    let events = event_queries::events_for_attendee(state, user_id);
    if events.is_empty() {
        println!("You are not registered for any events.");
    } else {
        render::print_events(&events);
    }
    Ok(())
}

fn cancel_registration(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let event_id = prompter.read_u32("Event id: ")?;
    attendee_commands::cancel_registration(state, event_id)?;
    println!("Registration cancelled.");
    Ok(())
}

fn update_contact(
    state: &AppState,
    prompter: &mut Prompter,
    user_id: AttendeeId,
) -> Result<(), ConsoleError> {
    let contact = prompter.read_nonempty("New contact info: ")?;
    attendee_commands::update_attendee_contact(state, user_id, &contact)?;
    println!("Contact updated.");
    Ok(())
}
