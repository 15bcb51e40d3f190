//! Test doubles and property strategies for the tether core.
//!
//! The doubles stand in for the two host collaborators: [`RecordingSink`]
//! and [`FailingSink`] for the navigation sink, [`ScriptedSource`] for the
//! text source. [`strategies`] holds the proptest generators shared by the
//! property suites.

#![forbid(unsafe_code)]

pub mod builders;
pub mod sinks;
pub mod sources;
pub mod strategies;

pub use builders::{map_of, seq_of, state_of};
pub use sinks::{FailingSink, RecordingSink};
pub use sources::ScriptedSource;
