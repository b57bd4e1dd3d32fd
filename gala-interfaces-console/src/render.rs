// Console rendering

use gala_application::queries::attendee_queries::{AttendanceRow, AttendeeRow};
use gala_application::queries::inventory_queries::InventoryReportRow;
use gala_application::queries::user_queries::UserSummary;
use gala_domain::{Event, InventoryItem};

pub fn print_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events.");
        return;
    }
    println!(
        "{:<5} {:<28} {:<12} {:<6} {:<10} {}",
        "ID", "Name", "Date", "Time", "Status", "Location"
    );
    for event in events {
        println!(
            "{:<5} {:<28} {:<12} {:<6} {:<10} {}",
            event.id,
            event.name,
            event.date.format("%Y-%m-%d").to_string(),
            event.time.format("%H:%M").to_string(),
            event.status.as_str(),
            event.location,
        );
    }
}

pub fn print_event_details(event: &Event) {
    println!("Event {}: {}", event.id, event.name);
    println!(
        "  Date: {} at {}",
        event.date.format("%Y-%m-%d"),
        event.time.format("%H:%M")
    );
    println!("  Location: {}", event.location);
    println!("  Category: {}", event.category);
    println!("  Status: {}", event.status.as_str());
    if !event.description.is_empty() {
        println!("  Description: {}", event.description);
    }
    println!("  Registered attendees: {}", event.attendee_ids.len());
}

pub fn print_attendees(rows: &[AttendeeRow]) {
    if rows.is_empty() {
        println!("No attendees registered.");
        return;
    }
    println!(
        "{:<6} {:<28} {:<28} {}",
        "ID", "Name", "Contact", "Checked in"
    );
    for row in rows {
        println!(
            "{:<6} {:<28} {:<28} {}",
            row.id,
            row.name,
            row.contact_info,
            if row.checked_in { "yes" } else { "no" },
        );
    }
}

pub fn print_inventory(items: &[InventoryItem]) {
    if items.is_empty() {
        println!("No inventory items.");
        return;
    }
    println!(
        "{:<5} {:<24} {:>7} {:>10} {:>10}  {}",
        "ID", "Name", "Total", "Allocated", "Available", "Description"
    );
    for item in items {
        println!(
            "{:<5} {:<24} {:>7} {:>10} {:>10}  {}",
            item.id,
            item.name,
            item.total_quantity,
            item.allocated_quantity,
            item.available_quantity(),
            item.description,
        );
    }
}

pub fn print_inventory_report(rows: &[InventoryReportRow]) {
    if rows.is_empty() {
        println!("No inventory items.");
        return;
    }
    for row in rows {
        println!(
            "{} (id {}): total {}, allocated {}, available {}",
            row.item.name,
            row.item.id,
            row.item.total_quantity,
            row.item.allocated_quantity,
            row.item.available_quantity(),
        );
        for line in &row.allocations {
            println!(
                "  - {} (event {}): {}",
                line.event_name, line.event_id, line.quantity
            );
        }
    }
}

pub fn print_attendance_report(rows: &[AttendanceRow]) {
    if rows.is_empty() {
        println!("No events.");
        return;
    }
    println!(
        "{:<5} {:<28} {:>10} {:>11}",
        "ID", "Event", "Registered", "Checked in"
    );
    for row in rows {
        println!(
            "{:<5} {:<28} {:>10} {:>11}",
            row.event_id, row.event_name, row.registered, row.checked_in
        );
    }
}

pub fn print_users(users: &[UserSummary]) {
    if users.is_empty() {
        println!("No user accounts.");
        return;
    }
    println!("{:<6} {:<28} {}", "ID", "Username", "Role");
    for user in users {
        println!("{:<6} {:<28} {}", user.id, user.username, user.role.as_str());
    }
}
