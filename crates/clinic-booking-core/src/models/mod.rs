//! Domain models for the clinic booking front-end.

mod directory;
mod records;

pub use directory::*;
pub use records::*;
