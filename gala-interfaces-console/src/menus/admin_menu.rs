// Administrator menu

use gala_application::commands::{
    attendee_commands, auth_commands, event_commands, export_commands, inventory_commands,
    user_commands,
};
use gala_application::dtos::{EventUpdate, NewEvent};
use gala_application::queries::{
    attendee_queries, event_queries, inventory_queries, user_queries,
};
use gala_application::AppState;
use gala_domain::Role;

use crate::error::ConsoleError;
use crate::menus::{menu_choice, settle, Flow};
use crate::prompts::Prompter;
use crate::render;

pub fn run(state: &AppState, prompter: &mut Prompter) -> Result<Flow, ConsoleError> {
    let username = match state.current_session() {
        Some(session) => session.username,
        None => return Ok(Flow::Continue),
    };
    print_menu(&username);
    let choice = match menu_choice(prompter, 24)? {
        Some(choice) => choice,
        None => return Ok(Flow::Exit),
    };
    if choice == 0 {
        auth_commands::logout(state);
        println!("Logged out.");
        return Ok(Flow::Continue);
    }
    let result = match choice {
        1 => create_event(state, prompter),
        2 => view_events(state),
        3 => search_events(state, prompter),
        4 => update_event(state, prompter),
        5 => delete_event(state, prompter),
        6 => register_attendee(state, prompter),
        7 => view_attendees(state, prompter),
        8 => check_in_attendee(state, prompter),
        9 => update_attendee_contact(state, prompter),
        10 => add_item(state, prompter),
        11 => view_inventory(state),
        12 => update_item(state, prompter),
        13 => set_total_quantity(state, prompter),
        14 => allocate_item(state, prompter),
        15 => deallocate_item(state, prompter),
        16 => delete_item(state, prompter),
        17 => register_user(state, prompter),
        18 => view_users(state),
        19 => delete_user(state, prompter),
        20 => attendance_report(state),
        21 => inventory_report(state),
        22 => export_attendee_sheet(state, prompter),
        23 => export_events(state),
        24 => export_inventory(state),
        _ => Ok(()),
    };
    settle(result)?;
    Ok(Flow::Continue)
}

fn print_menu(username: &str) {
    println!();
    println!("--- Administrator menu ({}) ---", username);
    println!("Events:");
    println!("  1) Create event");
    println!("  2) View events");
    println!("  3) Search events");
    println!("  4) Update event");
    println!("  5) Delete event");
    println!("Attendees:");
    println!("  6) Register attendee");
    println!("  7) View attendees for an event");
    println!("  8) Check in attendee");
    println!("  9) Update attendee contact");
    println!("Inventory:");
    println!(" 10) Add item");
    println!(" 11) View inventory");
    println!(" 12) Update item");
    println!(" 13) Set total quantity");
    println!(" 14) Allocate to event");
    println!(" 15) Deallocate from event");
    println!(" 16) Delete item");
    println!("Users:");
    println!(" 17) Register user");
    println!(" 18) View users");
    println!(" 19) Delete user");
    println!("Reports and exports:");
    println!(" 20) Attendance report");
    println!(" 21) Inventory report");
    println!(" 22) Export attendee sheet");
    println!(" 23) Export events");
    println!(" 24) Export inventory");
    println!("  0) Log out");
}

fn create_event(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let name = prompter.read_nonempty("Name: ")?;
    let date = prompter.read_nonempty("Date (YYYY-MM-DD): ")?;
    let time = prompter.read_nonempty("Time (HH:MM): ")?;
    let location = prompter.read_nonempty("Location: ")?;
    let description = prompter.read_line("Description (optional): ")?;
    let category = prompter.read_nonempty("Category: ")?;
    let event_id = event_commands::create_event(
        state,
        NewEvent {
            name,
            date,
            time,
            location,
            description,
            category,
        },
    )?;
    println!("Created event {}.", event_id);
    Ok(())
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

fn update_event(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let event_id = prompter.read_u32("Event id: ")?;
    let current = event_queries::find_event(state, event_id)?;
    render::print_event_details(&current);
    println!("Leave a field empty to keep the current value.");
    let update = EventUpdate {
        name: prompter.read_optional("Name: ")?,
        date: prompter.read_optional("Date (YYYY-MM-DD): ")?,
        time: prompter.read_optional("Time (HH:MM): ")?,
        location: prompter.read_optional("Location: ")?,
        description: prompter.read_optional("Description: ")?,
        category: prompter.read_optional("Category: ")?,
        status: prompter.read_optional("Status (upcoming/ongoing/completed/canceled): ")?,
    };
    event_commands::update_event(state, event_id, update)?;
    println!("Event updated.");
    Ok(())
}

fn delete_event(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let event_id = prompter.read_u32("Event id: ")?;
    let confirmed = prompter.confirm(
        "Delete this event, its registrations, and return its inventory? [y/N] ",
    )?;
    if !confirmed {
        return Ok(());
    }
    event_commands::delete_event(state, event_id)?;
    println!("Event deleted.");
    Ok(())
}

fn register_attendee(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let event_id = prompter.read_u32("Event id: ")?;
    let name = prompter.read_nonempty("Attendee name: ")?;
    let contact = prompter.read_nonempty("Contact info: ")?;
    let attendee_id = attendee_commands::register_attendee(state, event_id, &name, &contact)?;
    println!("Registered attendee {}.", attendee_id);
    Ok(())
}

fn view_attendees(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let event_id = prompter.read_u32("Event id: ")?;
    let event = event_queries::find_event(state, event_id)?;
    let rows = attendee_queries::attendees_for_event(state, event_id)?;
    println!("Attendees for '{}':", event.name);
    render::print_attendees(&rows);
    Ok(())
}

fn check_in_attendee(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let attendee_id = prompter.read_u32("Attendee id: ")?;
    if attendee_commands::check_in_attendee(state, attendee_id)? {
        println!("Checked in.");
    } else {
        println!("Already checked in.");
    }
    Ok(())
}

fn update_attendee_contact(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let attendee_id = prompter.read_u32("Attendee id: ")?;
    let contact = prompter.read_nonempty("New contact info: ")?;
    attendee_commands::update_attendee_contact(state, attendee_id, &contact)?;
    println!("Contact updated.");
    Ok(())
}

fn add_item(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let name = prompter.read_nonempty("Item name: ")?;
    let total = prompter.read_u32("Total quantity: ")?;
    let description = prompter.read_line("Description (optional): ")?;
    let item_id = inventory_commands::add_item(state, &name, total, &description)?;
    println!("Added item {}.", item_id);
    Ok(())
}

fn view_inventory(state: &AppState) -> Result<(), ConsoleError> {
    render::print_inventory(&inventory_queries::list_inventory(state));
    Ok(())
}

fn update_item(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let item_id = prompter.read_u32("Item id: ")?;
    println!("Leave a field empty to keep the current value.");
    let name = prompter.read_optional("Name: ")?;
    let description = prompter.read_optional("Description: ")?;
    inventory_commands::update_item(state, item_id, name, description)?;
    println!("Item updated.");
    Ok(())
}

fn set_total_quantity(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let item_id = prompter.read_u32("Item id: ")?;
    let new_total = prompter.read_u32("New total quantity: ")?;
    inventory_commands::set_total_quantity(state, item_id, new_total)?;
    println!("Total updated.");
    Ok(())
}

fn allocate_item(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let event_id = prompter.read_u32("Event id: ")?;
    let item_id = prompter.read_u32("Item id: ")?;
    let quantity = prompter.read_u32("Quantity: ")?;
    inventory_commands::allocate_item(state, event_id, item_id, quantity)?;
    println!("Allocated.");
    Ok(())
}

fn deallocate_item(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let event_id = prompter.read_u32("Event id: ")?;
    let item_id = prompter.read_u32("Item id: ")?;
    let quantity = prompter.read_u32("Quantity: ")?;
    let released = inventory_commands::deallocate_item(state, event_id, item_id, quantity)?;
    if released == 0 {
        println!("The event holds none of that item.");
    } else {
        println!("Released {}.", released);
    }
    Ok(())
}

fn delete_item(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let item_id = prompter.read_u32("Item id: ")?;
    if !prompter.confirm("Delete this item? [y/N] ")? {
        return Ok(());
    }
    inventory_commands::delete_item(state, item_id)?;
    println!("Item deleted.");
    Ok(())
}

fn register_user(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let username = prompter.read_nonempty("Username (4-100 characters): ")?;
    let password = prompter.read_secret("Password (6-100 characters): ")?;
    let role = if prompter.confirm("Administrator role? [y/N] ")? {
        Role::Admin
    } else {
        Role::RegularUser
    };
    let user_id = user_commands::register_user(state, &username, &password, role)?;
    println!("Created user {}.", user_id);
    Ok(())
}

fn view_users(state: &AppState) -> Result<(), ConsoleError> {
    render::print_users(&user_queries::list_users(state));
    Ok(())
}

fn delete_user(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let user_id = prompter.read_u32("User id: ")?;
    if !prompter.confirm("Delete this account? [y/N] ")? {
        return Ok(());
    }
    user_commands::delete_user(state, user_id)?;
    println!("Account deleted.");
    Ok(())
}

fn attendance_report(state: &AppState) -> Result<(), ConsoleError> {
    render::print_attendance_report(&attendee_queries::attendance_report(state));
    Ok(())
}

fn inventory_report(state: &AppState) -> Result<(), ConsoleError> {
    render::print_inventory_report(&inventory_queries::inventory_report(state));
    Ok(())
}

fn export_attendee_sheet(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let event_id = prompter.read_u32("Event id: ")?;
    let path = export_commands::export_event_attendees(state, event_id)?;
    println!("Wrote {}.", path.display());
    Ok(())
}

fn export_events(state: &AppState) -> Result<(), ConsoleError> {
    let path = export_commands::export_events(state)?;
    println!("Wrote {}.", path.display());
    Ok(())
}

fn export_inventory(state: &AppState) -> Result<(), ConsoleError> {
    let path = export_commands::export_inventory(state)?;
    println!("Wrote {}.", path.display());
    Ok(())
}
