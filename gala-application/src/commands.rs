// Commands mutate the store and persist before returning
pub mod attendee_commands;
pub mod auth_commands;
pub mod event_commands;
pub mod export_commands;
pub mod inventory_commands;
pub mod user_commands;
