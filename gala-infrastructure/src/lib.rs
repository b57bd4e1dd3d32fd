// Gala Infrastructure Layer
//
// Flat-file persistence, the line-oriented record codec, configuration
// loading, and export services. Implements the storage port defined by
// the domain layer.

pub mod codec;
pub mod config;
pub mod repositories;
pub mod services;

pub use codec::*;
pub use config::*;
pub use repositories::*;
pub use services::*;
