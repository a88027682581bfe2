//! Event handlers, as `impl` blocks on [`crate::Clinic`].
//!
//! Each handler reads what it needs through the view bindings, updates the
//! surface and page state, and reports an [`crate::Outcome`]. User mistakes
//! become alerts or failure panels, never errors.

mod booking;
mod filter;
mod selection;
mod status;

pub use booking::*;
pub use status::*;
