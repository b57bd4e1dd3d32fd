// Read-only views over the store
pub mod attendee_queries;
pub mod event_queries;
pub mod inventory_queries;
pub mod user_queries;
