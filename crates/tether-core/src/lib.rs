//! Tether - keep state and a shareable query string in lockstep
//!
//! Tether mirrors an application-owned state object into a flat,
//! human-readable query string and mirrors edits of that string back into
//! state, without redundant writes or feedback loops.
//!
//! # Pieces
//!
//! - [`value`]: the [`Value`] tagged variant (scalar / sequence / mapping),
//!   the presence predicate, and the one-level canonicalizer.
//! - [`snapshot`]: the ordered key/text [`Snapshot`] and its `?key=text`
//!   wire form.
//! - [`codec`]: [`decode`] (JSON literal with raw-text fallback) and
//!   [`encode`] (canonicalize, drop absent, serialize).
//! - [`observed`]: poll-based change watches, the explicit notification
//!   primitive the session is wired with.
//! - [`sync`]: the [`Synchronizer`] passes with the last-written-form guard,
//!   and the [`SyncSession`] subscription wiring.
//!
//! # Shape of an integration
//!
//! ```rust,ignore
//! use tether_core::prelude::*;
//!
//! let source = Observed::new(Snapshot::parse(host.current_query()));
//! let target = Observed::new(State::new());
//!
//! let sync = Synchronizer::new(host_sink, |decoded| app.commit(decoded));
//! let mut session = SyncSession::new(sync, &source, &target);
//! session.prime();
//!
//! // host notifies: the query string changed
//! source.set(Snapshot::parse(host.current_query()));
//! session.service();
//!
//! // app notifies: desired state changed
//! target.set(app.desired_state());
//! session.service();
//! ```
//!
//! Both passes run to completion synchronously; the only I/O is the one
//! sink call per genuinely new form.

#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod errors;
pub mod observed;
pub mod prelude;
pub mod snapshot;
pub mod sync;
pub mod value;

pub use codec::{decode, encode};
pub use config::SyncConfig;
pub use errors::SinkError;
pub use observed::{Observed, Watch};
pub use snapshot::Snapshot;
pub use sync::{NavigateOptions, SyncSession, Synchronizer, TextSink};
pub use value::{canonicalize, Map, State, Value};
