// Repository implementations

pub mod flat_files;

pub use flat_files::*;
