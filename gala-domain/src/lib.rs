// Gala Domain Layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod store;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use services::*;
pub use store::*;
pub use value_objects::*;
