//! Client-side state stores.
//!
//! The stores are explicit objects constructed once per application
//! instance and handed to consumers by reference via [`crate::state`] -
//! there are no hidden global singletons.
//!
//! - [`session`] - who is signed in, backed by a durable snapshot
//! - [`cart`] - the active session's purchase intents
//! - [`snapshot`] - the key-value persistence behind the session store

pub mod cart;
pub mod session;
pub mod snapshot;

pub use cart::{CartEntry, CartStore};
pub use session::{AuthError, SessionStore};
pub use snapshot::{JsonSnapshotStore, MemorySnapshotStore, SnapshotStore};
