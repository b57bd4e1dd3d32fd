use gala_domain::{EventId, InventoryItem, ItemId};

use crate::{AppError, AppState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationLine {
    pub event_id: EventId,
    pub event_name: String,
    pub quantity: u32,
}

/// Per-item totals plus the per-event breakdown of where the allocated
/// quantity went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReportRow {
    pub item: InventoryItem,
    pub allocations: Vec<AllocationLine>,
}

pub fn list_inventory(state: &AppState) -> Vec<InventoryItem> {
    state.store.borrow().inventory.iter().cloned().collect()
}

pub fn find_item(state: &AppState, item_id: ItemId) -> Result<InventoryItem, AppError> {
    state
        .store
        .borrow()
        .inventory
        .get(item_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no inventory item with id {}", item_id)))
}

pub fn inventory_report(state: &AppState) -> Vec<InventoryReportRow> {
    let store = state.store.borrow();
    store
        .inventory
        .iter()
        .map(|item| {
            let allocations = store
                .events
                .iter()
                .filter_map(|event| {
                    let quantity = event.allocation_of(item.id);
                    if quantity == 0 {
                        return None;
                    }
                    Some(AllocationLine {
                        event_id: event.id,
                        event_name: event.name.clone(),
                        quantity,
                    })
                })
                .collect();
            InventoryReportRow {
                item: item.clone(),
                allocations,
            }
        })
        .collect()
}
