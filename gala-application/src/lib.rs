// Gala Application Layer

pub mod commands;
pub mod dtos;
pub mod error;
pub mod queries;
pub mod session;
pub mod state;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::AppError;
pub use session::Session;
pub use state::{AppState, RuntimeConfig};
