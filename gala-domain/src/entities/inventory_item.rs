// Inventory item entity

use serde::{Deserialize, Serialize};

use crate::value_objects::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub total_quantity: u32,
    pub allocated_quantity: u32,
    pub description: String,
}

impl InventoryItem {
    /// Quantity still free to allocate. Saturates instead of underflowing
    /// when hand-edited files left `allocated_quantity` above the total.
    pub fn available_quantity(&self) -> u32 {
        self.total_quantity.saturating_sub(self.allocated_quantity)
    }
}
