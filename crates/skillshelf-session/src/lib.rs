//! Disclosure sessions over a shared document store
//!
//! Implements the three-level progressive load. Per session, each document
//! moves through `Unloaded -> MetadataLoaded -> BodyLoaded`:
//!
//! - **activate** surfaces metadata once a query has triggered interest
//! - **expand** loads the body, only after activation
//! - **resolve_reference** follows a body link to another document without
//!   escalating the target's level
//!
//! The store is immutable and shared; each session owns its own level map,
//! so concurrent sessions need no synchronization.

pub mod error;
pub mod session;

pub use error::{Result, SessionError};
pub use session::DisclosureSession;
