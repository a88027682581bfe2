//! View binding layer.
//!
//! Handlers never look elements up ad hoc. They go through the [`Surface`]
//! trait using the element ids collected per page in [`bindings`].
//! [`MemorySurface`] is the in-process implementation used by tests; the
//! browser implementation lives in the web crate.

pub mod bindings;
mod memory;
mod surface;

pub use memory::*;
pub use surface::*;
