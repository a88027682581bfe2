//! Clinic Booking Core Library
//!
//! Client-side logic of a demo clinic booking site. All data is compiled in;
//! bookings produce a confirmation and a random reference id and are then
//! forgotten.
//!
//! # Architecture
//!
//! ```text
//!   DOM event ──► ClinicEvent ──► Clinic::handle ──► handler
//!                                       │               │
//!                                   PageState      render / validate
//!                                       │               │
//!                                       └──► Surface ◄──┘
//!                                     (browser or memory)
//! ```
//!
//! On load, [`Clinic::boot`] probes the page markers, renders the cards of
//! every detected page and returns the [`Listener`]s the host attaches.
//!
//! # Modules
//!
//! - [`dataset`]: static doctors, hospitals, appointments and test orders
//! - [`models`]: record types and statuses
//! - [`render`]: card renderers
//! - [`validate`]: date validation and clocks
//! - [`handlers`]: selection, filter, booking and status handlers
//! - [`bootstrap`]: page detection and wiring
//! - [`view`]: surface trait, element bindings, in-memory surface

pub mod bootstrap;
pub mod clinic;
pub mod config;
pub mod dataset;
pub mod error;
pub mod handlers;
pub mod models;
pub mod reference;
pub mod render;
pub mod state;
pub mod validate;
pub mod view;

// Re-export commonly used types
pub use bootstrap::{detect_pages, Listener, PageKind};
pub use clinic::{Clinic, ClinicEvent, Outcome, Rejection};
pub use config::{ClinicConfig, FilterMode};
pub use error::{ClinicError, ClinicResult};
pub use reference::ReferenceId;
pub use validate::{Clock, DateCheck, FixedClock, SystemClock};
pub use view::{Card, MemorySurface, Surface, TimerHandle};
