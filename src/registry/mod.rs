//! Format registry for lookup and default selection
//!
//! The registry stores media formats by name and hands out shared handles.
//! One lock guards the whole store; every operation holds it only for an
//! in-memory scan or update.
//!
//! # Architecture
//!
//! ```text
//!                        Arc<FormatRegistry>
//!                  ┌──────────────────────────────┐
//!                  │ Mutex<                       │
//!                  │   formats: IndexMap<name,    │
//!                  │     Arc<Format>>,            │
//!                  │   default_name: Option<..>,  │
//!                  │ >                            │
//!                  └──────────────┬───────────────┘
//!                                 │
//!         ┌───────────────────────┼───────────────────────┐
//!         ▼                       ▼                       ▼
//!    register()              get_or_default()         formats()
//!    replace + append        name, then default       snapshot
//! ```
//!
//! # Shared Handles
//!
//! Lookups return `Arc<Format>`, so results stay valid after the registry
//! replaces or removes the record. Snapshots from `formats()` share the same
//! allocations and are unaffected by later mutations.

pub mod config;
pub mod error;
pub mod global;
pub mod store;

pub use config::RegistryConfig;
pub use error::{Lookup, RegistryError, Result};
pub use store::FormatRegistry;
