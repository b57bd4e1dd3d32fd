// Gala Console Interface Layer
//
// Numbered menu loops over the application commands and queries. All
// input goes through one line editor with persistent history.

pub mod error;
pub mod menus;
pub mod prompts;
pub mod render;

pub use error::*;
pub use menus::*;
pub use prompts::*;
