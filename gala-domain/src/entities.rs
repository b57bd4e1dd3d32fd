// Domain entities
pub mod attendee;
pub mod event;
pub mod inventory_item;
pub mod user;

pub use attendee::*;
pub use event::*;
pub use inventory_item::*;
pub use user::*;
