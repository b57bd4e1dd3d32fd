// Domain value objects
pub mod event_status;
pub mod identifiers;
pub mod role;

pub use event_status::*;
pub use identifiers::*;
pub use role::*;
