// Export service
//
// Writes human-readable snapshots of the store to text files under the
// export directory. Returns the written path so the console can tell
// the operator where the file landed.

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use gala_domain::{EntityStore, Event, EventId, ExportService};

pub struct FileExporter {
    export_dir: PathBuf,
}

impl FileExporter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    fn write_export(&self, file_name: &str, content: &str) -> anyhow::Result<PathBuf> {
        if !self.export_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.export_dir)?;
        }
        let path = self.export_dir.join(file_name);
        fs::write(&path, content)?;
        Ok(path)
    }
}

impl ExportService for FileExporter {
    /// The file is named after the event, `<name>_attendees.txt`, with
    /// unsafe characters replaced.
    fn export_event_attendees(
        &self,
        store: &EntityStore,
        event_id: EventId,
    ) -> anyhow::Result<PathBuf> {
        let event = store
            .events
            .get(event_id)
            .ok_or_else(|| anyhow::anyhow!("no event with id {}", event_id))?;
        let text = render_attendee_sheet(store, event);
        let file_name = format!("{}_attendees.txt", sanitize_file_stem(&event.name));
        self.write_export(&file_name, &text)
    }

    /// The file name carries the export date.
    fn export_events(&self, store: &EntityStore) -> anyhow::Result<PathBuf> {
        let text = render_event_sheet(store);
        let file_name = format!("events_export_{}.txt", Local::now().format("%Y-%m-%d"));
        self.write_export(&file_name, &text)
    }

    fn export_inventory(&self, store: &EntityStore) -> anyhow::Result<PathBuf> {
        let text = render_inventory_sheet(store);
        let file_name = format!("inventory_export_{}.txt", Local::now().format("%Y-%m-%d"));
        self.write_export(&file_name, &text)
    }
}

fn render_attendee_sheet(store: &EntityStore, event: &Event) -> String {
    let mut text = format!(
        "Attendee sheet: {}\nDate: {}  Time: {}  Location: {}\nRegistered: {}\n\n",
        event.name,
        event.date.format("%Y-%m-%d"),
        event.time.format("%H:%M"),
        event.location,
        event.attendee_ids.len(),
    );
    text.push_str(&format!(
        "{:<6} {:<30} {:<30} {}\n",
        "ID", "Name", "Contact", "Checked in"
    ));
    for id in &event.attendee_ids {
        match store.attendees.get(*id) {
            Some(attendee) => text.push_str(&format!(
                "{:<6} {:<30} {:<30} {}\n",
                attendee.id,
                attendee.name,
                attendee.contact_info,
                if attendee.checked_in { "yes" } else { "no" },
            )),
            None => text.push_str(&format!("{:<6} {:<30} {:<30} no\n", id, "Unknown", "")),
        }
    }
    text
}

fn render_event_sheet(store: &EntityStore) -> String {
    let mut text = format!(
        "Events export {}\nTotal events: {}\n",
        Local::now().format("%Y-%m-%d"),
        store.events.len(),
    );
    for event in store.events.iter() {
        text.push('\n');
        text.push_str(&render_event_block(store, event));
    }
    text
}

fn render_event_block(store: &EntityStore, event: &Event) -> String {
    let attendee_names: Vec<String> = event
        .attendee_ids
        .iter()
        .map(|id| match store.attendees.get(*id) {
            Some(attendee) => attendee.name.clone(),
            None => format!("#{id}"),
        })
        .collect();
    let allocations: Vec<String> = event
        .allocated_inventory
        .iter()
        .map(|(item_id, quantity)| match store.inventory.get(*item_id) {
            Some(item) => format!("{} x{}", item.name, quantity),
            None => format!("#{item_id} x{quantity}"),
        })
        .collect();

    let mut block = format!("Event {}: {}\n", event.id, event.name);
    block.push_str(&format!(
        "  Date: {} at {}\n",
        event.date.format("%Y-%m-%d"),
        event.time.format("%H:%M"),
    ));
    block.push_str(&format!("  Location: {}\n", event.location));
    block.push_str(&format!("  Category: {}\n", event.category));
    block.push_str(&format!("  Status: {}\n", event.status.as_str()));
    if !event.description.is_empty() {
        block.push_str(&format!("  Description: {}\n", event.description));
    }
    block.push_str(&format!(
        "  Attendees ({}): {}\n",
        attendee_names.len(),
        if attendee_names.is_empty() {
            "none".to_string()
        } else {
            attendee_names.join(", ")
        },
    ));
    block.push_str(&format!(
        "  Allocated inventory: {}\n",
        if allocations.is_empty() {
            "none".to_string()
        } else {
            allocations.join("; ")
        },
    ));
    block
}

fn render_inventory_sheet(store: &EntityStore) -> String {
    let mut text = format!(
        "Inventory export {}\nTotal items: {}\n",
        Local::now().format("%Y-%m-%d"),
        store.inventory.len(),
    );
    for item in store.inventory.iter() {
        text.push('\n');
        text.push_str(&format!("Item {}: {}\n", item.id, item.name));
        text.push_str(&format!(
            "  Total: {}  Allocated: {}  Available: {}\n",
            item.total_quantity,
            item.allocated_quantity,
            item.available_quantity(),
        ));
        if !item.description.is_empty() {
            text.push_str(&format!("  Description: {}\n", item.description));
        }
        let holders: Vec<String> = store
            .events
            .iter()
            .filter_map(|event| {
                let quantity = event.allocation_of(item.id);
                (quantity > 0).then(|| format!("{} x{}", event.name, quantity))
            })
            .collect();
        if !holders.is_empty() {
            text.push_str(&format!("  Held by: {}\n", holders.join("; ")));
        }
    }
    text
}

/// Keeps file names portable: anything outside `[A-Za-z0-9_-]` becomes
/// an underscore.
fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "event".to_string()
    } else {
        stem
    }
}
