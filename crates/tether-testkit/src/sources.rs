//! Text-source double.

use tether_core::{Observed, Snapshot};

/// Scripted stand-in for the host's text source.
///
/// Owns the [`Observed`] cell a session watches; each push models one
/// coalesced change notification from the host.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    current: Observed<Snapshot>,
}

impl ScriptedSource {
    /// Create a source holding an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell a session should watch.
    pub fn observed(&self) -> &Observed<Snapshot> {
        &self.current
    }

    /// Push a snapshot built from key/text pairs.
    pub fn push_pairs(&self, pairs: &[(&str, &str)]) {
        self.current.set(pairs.iter().copied().collect());
    }

    /// Push a snapshot parsed from a rendered form.
    pub fn push_rendered(&self, rendered: &str) {
        self.current.set(Snapshot::parse(rendered));
    }
}
