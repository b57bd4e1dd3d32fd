use tracing::info;

use gala_domain::ledger;
use gala_domain::{EventId, InventoryItem, ItemId};

use crate::validation::{validate_free_text, validate_required_text};
use crate::{AppError, AppState};

/// Item names are soft-unique: enforced by lookup before insert, never as
/// a hard constraint on loaded data.
pub fn add_item(
    state: &AppState,
    name: &str,
    total_quantity: u32,
    description: &str,
) -> Result<ItemId, AppError> {
    state.require_admin()?;
    let name = validate_required_text("item name", name)?;
    let description = validate_free_text("description", description)?;

    let id = {
        let mut store = state.store.borrow_mut();
        if store.find_item_by_name(&name).is_some() {
            return Err(AppError::Validation(format!(
                "an item named '{}' already exists",
                name
            )));
        }
        store.inventory.insert(InventoryItem {
            id: 0,
            name: name.clone(),
            total_quantity,
            allocated_quantity: 0,
            description,
        })
    };
    state.persist()?;
    info!("added inventory item '{}' (id {})", name, id);
    Ok(id)
}

pub fn update_item(
    state: &AppState,
    item_id: ItemId,
    name: Option<String>,
    description: Option<String>,
) -> Result<(), AppError> {
    state.require_admin()?;
    let name = name
        .as_deref()
        .map(|raw| validate_required_text("item name", raw))
        .transpose()?;
    let description = description
        .as_deref()
        .map(|raw| validate_free_text("description", raw))
        .transpose()?;

    {
        let mut store = state.store.borrow_mut();
        if let Some(name) = &name {
            let clash = store
                .find_item_by_name(name)
                .map(|existing| existing.id != item_id)
                .unwrap_or(false);
            if clash {
                return Err(AppError::Validation(format!(
                    "an item named '{}' already exists",
                    name
                )));
            }
        }
        let item = store
            .inventory
            .get_mut(item_id)
            .ok_or_else(|| AppError::NotFound(format!("no inventory item with id {}", item_id)))?;
        if let Some(name) = name {
            item.name = name;
        }
        if let Some(description) = description {
            item.description = description;
        }
    }
    state.persist()?;
    Ok(())
}

pub fn set_total_quantity(
    state: &AppState,
    item_id: ItemId,
    new_total: u32,
) -> Result<(), AppError> {
    state.require_admin()?;
    {
        let mut store = state.store.borrow_mut();
        let item = store
            .inventory
            .get_mut(item_id)
            .ok_or_else(|| AppError::NotFound(format!("no inventory item with id {}", item_id)))?;
        ledger::set_total_quantity(item, new_total)?;
    }
    state.persist()?;
    Ok(())
}

pub fn allocate_item(
    state: &AppState,
    event_id: EventId,
    item_id: ItemId,
    quantity: u32,
) -> Result<(), AppError> {
    state.require_admin()?;
    {
        let mut store = state.store.borrow_mut();
        let store = &mut *store;
        let event = store
            .events
            .get_mut(event_id)
            .ok_or_else(|| AppError::NotFound(format!("no event with id {}", event_id)))?;
        let item = store
            .inventory
            .get_mut(item_id)
            .ok_or_else(|| AppError::NotFound(format!("no inventory item with id {}", item_id)))?;
        ledger::allocate(item, event, quantity)?;
    }
    state.persist()?;
    info!("allocated {} of item {} to event {}", quantity, item_id, event_id);
    Ok(())
}

/// Returns the quantity actually released, which may be less than asked
/// for; 0 means the event held none of this item and nothing changed.
pub fn deallocate_item(
    state: &AppState,
    event_id: EventId,
    item_id: ItemId,
    quantity: u32,
) -> Result<u32, AppError> {
    state.require_admin()?;
    let released = {
        let mut store = state.store.borrow_mut();
        let store = &mut *store;
        let event = store
            .events
            .get_mut(event_id)
            .ok_or_else(|| AppError::NotFound(format!("no event with id {}", event_id)))?;
        let item = store
            .inventory
            .get_mut(item_id)
            .ok_or_else(|| AppError::NotFound(format!("no inventory item with id {}", item_id)))?;
        ledger::deallocate(item, event, quantity)
    };
    if released > 0 {
        state.persist()?;
        info!(
            "released {} of item {} from event {}",
            released, item_id, event_id
        );
    }
    Ok(released)
}

/// An item still allocated anywhere cannot be deleted; deallocate first.
pub fn delete_item(state: &AppState, item_id: ItemId) -> Result<(), AppError> {
    state.require_admin()?;
    let name = {
        let mut store = state.store.borrow_mut();
        if store.inventory.get(item_id).is_none() {
            return Err(AppError::NotFound(format!(
                "no inventory item with id {}",
                item_id
            )));
        }
        let holders = store
            .events
            .iter()
            .filter(|event| event.allocation_of(item_id) > 0)
            .count();
        if holders > 0 {
            return Err(AppError::Validation(format!(
                "item is allocated to {} event(s); deallocate first",
                holders
            )));
        }
        store
            .inventory
            .remove(item_id)
            .map(|item| item.name)
            .unwrap_or_default()
    };
    state.persist()?;
    info!("deleted inventory item '{}' (id {})", name, item_id);
    Ok(())
}
