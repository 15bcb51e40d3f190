//! Tether prelude.
//!
//! Curated re-exports for host integration.

pub use crate::codec::{decode, encode};
pub use crate::config::SyncConfig;
pub use crate::errors::SinkError;
pub use crate::observed::{Observed, Watch};
pub use crate::snapshot::Snapshot;
pub use crate::sync::{NavigateOptions, SyncSession, Synchronizer, TextSink};
pub use crate::value::{canonicalize, Map, State, Value};
