//! Core dictionary engine for glossa: the in-memory record store, its
//! line-record text format, and the query and game operations layered on it.
//!
//! The crate owns no console I/O; the interactive menu lives in `glossa-app`
//! and drives everything through the types re-exported here.
pub mod entry;
pub mod error;
pub mod game;
pub mod query;
pub mod store;

pub use entry::Entry;
pub use game::{Challenge, GameSession, Outcome};
pub use store::{LoadSummary, Store};
