// Allocation ledger
// Keeps InventoryItem.allocated_quantity (global) and
// Event.allocated_inventory (per event) mutually consistent.

use thiserror::Error;

use crate::entities::{Event, InventoryItem};
use crate::store::Collection;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("quantity must be greater than zero")]
    InvalidQuantity,
    #[error("insufficient availability: requested {requested}, available {available}")]
    Insufficient { requested: u32, available: u32 },
    #[error("new total {requested} is below the allocated quantity {allocated}")]
    TotalBelowAllocated { requested: u32, allocated: u32 },
}

/// Reserves `quantity` of `item` for `event`. Either both sides of the
/// ledger move or neither does.
pub fn allocate(
    item: &mut InventoryItem,
    event: &mut Event,
    quantity: u32,
) -> Result<(), LedgerError> {
    if quantity == 0 {
        return Err(LedgerError::InvalidQuantity);
    }
    let available = item.available_quantity();
    if quantity > available {
        return Err(LedgerError::Insufficient {
            requested: quantity,
            available,
        });
    }
    item.allocated_quantity += quantity;
    *event.allocated_inventory.entry(item.id).or_insert(0) += quantity;
    Ok(())
}

/// Returns `quantity` of `item` from `event` back to the free pool,
/// clamped to what the event actually holds. Returns the amount released;
/// 0 when the item was never allocated to that event.
pub fn deallocate(item: &mut InventoryItem, event: &mut Event, quantity: u32) -> u32 {
    let held = event.allocation_of(item.id);
    let released = quantity.min(held);
    if released == 0 {
        return 0;
    }
    if released == held {
        event.allocated_inventory.remove(&item.id);
    } else if let Some(entry) = event.allocated_inventory.get_mut(&item.id) {
        *entry -= released;
    }
    item.allocated_quantity = item.allocated_quantity.saturating_sub(released);
    released
}

/// Resizes the item's total stock. Shrinking below the quantity already
/// promised out is refused.
pub fn set_total_quantity(item: &mut InventoryItem, new_total: u32) -> Result<(), LedgerError> {
    if new_total < item.allocated_quantity {
        return Err(LedgerError::TotalBelowAllocated {
            requested: new_total,
            allocated: item.allocated_quantity,
        });
    }
    item.total_quantity = new_total;
    Ok(())
}

/// Releases every allocation an event holds back into the global pools.
/// Must run before the event itself is removed, or the allocated quantity
/// leaks permanently. Entries naming unknown items are dropped with a
/// warning.
pub fn release_event(event: &mut Event, inventory: &mut Collection<InventoryItem>) {
    let allocations = std::mem::take(&mut event.allocated_inventory);
    for (item_id, quantity) in allocations {
        match inventory.get_mut(item_id) {
            Some(item) => {
                item.allocated_quantity = item.allocated_quantity.saturating_sub(quantity);
            }
            None => {
                tracing::warn!(
                    "event {} held {} of unknown item {}, nothing to release",
                    event.id,
                    quantity,
                    item_id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::EventStatus;
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::BTreeMap;

    fn chairs(total: u32) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "Chairs".to_string(),
            total_quantity: total,
            allocated_quantity: 0,
            description: String::new(),
        }
    }

    fn gala() -> Event {
        Event {
            id: 10,
            name: "Gala Night".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
            time: NaiveTime::from_hms_opt(19, 0, 0).expect("valid time"),
            location: "Hall A".to_string(),
            description: String::new(),
            category: "General".to_string(),
            status: EventStatus::Upcoming,
            attendee_ids: Vec::new(),
            allocated_inventory: BTreeMap::new(),
        }
    }

    #[test]
    fn allocate_moves_both_sides_of_the_ledger() {
        let mut item = chairs(100);
        let mut event = gala();
        allocate(&mut item, &mut event, 30).expect("allocate 30");
        assert_eq!(item.allocated_quantity, 30);
        assert_eq!(item.available_quantity(), 70);
        assert_eq!(event.allocation_of(1), 30);
    }

    #[test]
    fn allocate_rejects_overdraw_without_mutation() {
        let mut item = chairs(100);
        let mut event = gala();
        allocate(&mut item, &mut event, 30).expect("allocate 30");

        let err = allocate(&mut item, &mut event, 80).expect_err("only 70 available");
        assert_eq!(
            err,
            LedgerError::Insufficient {
                requested: 80,
                available: 70
            }
        );
        assert_eq!(item.available_quantity(), 70);
        assert_eq!(event.allocation_of(1), 30);
    }

    #[test]
    fn allocate_rejects_zero_quantity() {
        let mut item = chairs(100);
        let mut event = gala();
        assert_eq!(
            allocate(&mut item, &mut event, 0),
            Err(LedgerError::InvalidQuantity)
        );
    }

    #[test]
    fn deallocate_clamps_and_reports_actual() {
        let mut item = chairs(100);
        let mut event = gala();
        allocate(&mut item, &mut event, 30).expect("allocate 30");

        assert_eq!(deallocate(&mut item, &mut event, 20), 20);
        assert_eq!(item.available_quantity(), 90);
        assert_eq!(event.allocation_of(1), 10);

        // More than held: clamp to the remaining 10 and drop the entry.
        assert_eq!(deallocate(&mut item, &mut event, 25), 10);
        assert_eq!(item.allocated_quantity, 0);
        assert!(event.allocated_inventory.is_empty());

        // Nothing held at all.
        assert_eq!(deallocate(&mut item, &mut event, 5), 0);
    }

    #[test]
    fn set_total_cannot_shrink_below_allocated() {
        let mut item = chairs(100);
        let mut event = gala();
        allocate(&mut item, &mut event, 30).expect("allocate 30");

        let err = set_total_quantity(&mut item, 20).expect_err("30 promised out");
        assert_eq!(
            err,
            LedgerError::TotalBelowAllocated {
                requested: 20,
                allocated: 30
            }
        );
        assert_eq!(item.total_quantity, 100);

        set_total_quantity(&mut item, 30).expect("shrink to exactly allocated");
        assert_eq!(item.total_quantity, 30);
    }

    #[test]
    fn release_event_returns_every_allocation() {
        let mut inventory = Collection::new();
        inventory.insert(chairs(100));
        let mut event = gala();
        {
            let item = inventory.get_mut(1).expect("chairs");
            allocate(item, &mut event, 25).expect("allocate 25");
        }

        release_event(&mut event, &mut inventory);
        assert!(event.allocated_inventory.is_empty());
        assert_eq!(inventory.get(1).expect("chairs").allocated_quantity, 0);
    }

    #[test]
    fn allocation_invariant_holds_across_operations() {
        let mut inventory = Collection::new();
        inventory.insert(chairs(100));
        let mut first = gala();
        let mut second = gala();
        second.id = 11;

        {
            let item = inventory.get_mut(1).expect("chairs");
            allocate(item, &mut first, 40).expect("allocate 40");
            allocate(item, &mut second, 35).expect("allocate 35");
            deallocate(item, &mut first, 15);
        }
        release_event(&mut second, &mut inventory);

        let item = inventory.get(1).expect("chairs");
        let held: u32 = first.allocation_of(1) + second.allocation_of(1);
        assert_eq!(item.allocated_quantity, held);
        assert_eq!(item.allocated_quantity, 25);
    }
}
