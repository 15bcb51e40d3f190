//! The synchronization driver.
//!
//! [`Synchronizer`] owns the two passes. Inbound, a snapshot is decoded and
//! reported to the consumer callback; the consumer commits it into its own
//! state. Outbound, a state object is encoded, rendered, and compared to
//! the last written form — only a genuinely new form reaches the sink. That
//! comparison is what keeps the two directions from feeding each other:
//! without it every outbound pass would raise a navigation event, which
//! could re-trigger the inbound pass indefinitely.
//!
//! [`SyncSession`] wires the passes to explicit change watches on the text
//! source and on the consumer's target state; the host calls
//! [`SyncSession::service`] whenever either side signals a change.

use crate::codec::{decode, encode};
use crate::config::SyncConfig;
use crate::errors::SinkError;
use crate::observed::{Observed, Watch};
use crate::snapshot::Snapshot;
use crate::value::State;

/// Options forwarded to the sink alongside every applied form.
///
/// The core does not interpret them; they exist so hosts can thread
/// navigation behavior (today: scroll preservation) through the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Keep the current scroll position when the new form is applied.
    pub preserve_scroll: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            preserve_scroll: true,
        }
    }
}

/// The navigation side of the host environment.
///
/// Applying a form is fire-and-forget: the driver logs a failure and moves
/// on, and it never retries. Hosts guarantee on their side that applying a
/// form identical to the current one does not loop back as a fresh source
/// notification indefinitely; the driver's own guarantee is that it never
/// originates such a loop.
pub trait TextSink {
    /// Apply a fully rendered canonical form (`?key=text&...`).
    fn apply(&mut self, rendered: &str, options: &NavigateOptions) -> Result<(), SinkError>;
}

type ChangeHandler = Box<dyn FnMut(State) + Send>;

/// Bidirectional state/query-string synchronizer.
///
/// Both passes are idempotent and safe to re-run with unchanged input: the
/// inbound pass is a pure function of the snapshot, and the outbound pass
/// writes to the sink only when the rendered form differs from the last
/// one written.
pub struct Synchronizer<S> {
    sink: S,
    config: SyncConfig,
    on_change: ChangeHandler,
    last_published: Option<String>,
}

impl<S: TextSink> Synchronizer<S> {
    /// Create a synchronizer with the default configuration.
    ///
    /// `on_change` is invoked once per inbound pass with the fully decoded
    /// state object.
    pub fn new(sink: S, on_change: impl FnMut(State) + Send + 'static) -> Self {
        Self::with_config(sink, on_change, SyncConfig::default())
    }

    /// Create a synchronizer with an explicit configuration.
    pub fn with_config(
        sink: S,
        on_change: impl FnMut(State) + Send + 'static,
        config: SyncConfig,
    ) -> Self {
        Self {
            sink,
            config,
            on_change: Box::new(on_change),
            last_published: None,
        }
    }

    /// Inbound pass: decode the snapshot and report it to the consumer.
    ///
    /// Never fails and never writes to the sink or the guard cache.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        let state = decode(snapshot);
        tracing::debug!(params = snapshot.len(), "decoded inbound snapshot");
        (self.on_change)(state);
    }

    /// Outbound pass: encode the state and publish the rendered form.
    ///
    /// The whole snapshot is built before the sink is touched, so a partial
    /// form is never observable. A form equal to the last written one is
    /// skipped entirely; the first pass after construction always writes.
    pub fn publish(&mut self, state: &State) {
        let rendered = encode(state).render();
        if self.last_published.as_deref() == Some(rendered.as_str()) {
            tracing::trace!("rendered form unchanged, skipping publish");
            return;
        }
        self.last_published = Some(rendered.clone());

        let options = NavigateOptions {
            preserve_scroll: self.config.preserve_scroll,
        };
        match self.sink.apply(&rendered, &options) {
            Ok(()) => tracing::debug!(form = %rendered, "published query string"),
            Err(error) => tracing::warn!(%error, "navigation sink rejected published form"),
        }
    }
}

/// Subscription wiring between a synchronizer and its two inputs.
///
/// The session holds one watch on the host's text source and one on the
/// consumer's target state. [`SyncSession::service`] runs the inbound pass
/// if the source moved and the outbound pass if the target moved — nothing
/// more. Scheduling is the host's: call `service` from whatever loop or
/// callback learns that an input changed; redundant calls are harmless.
pub struct SyncSession<S> {
    synchronizer: Synchronizer<S>,
    source: Observed<Snapshot>,
    source_watch: Watch<Snapshot>,
    target: Observed<State>,
    target_watch: Watch<State>,
}

impl<S: TextSink> SyncSession<S> {
    /// Wire a synchronizer to a source and a target cell.
    ///
    /// Watches start at the cells' current revisions; call
    /// [`SyncSession::prime`] to process the values already in place.
    pub fn new(
        synchronizer: Synchronizer<S>,
        source: &Observed<Snapshot>,
        target: &Observed<State>,
    ) -> Self {
        Self {
            synchronizer,
            source: source.clone(),
            source_watch: source.watch(),
            target: target.clone(),
            target_watch: target.watch(),
        }
    }

    /// Run both passes on the current values, unconditionally.
    ///
    /// This is the mount step: the snapshot already in the source is
    /// reported to the consumer, and the state already in the target is
    /// published (the first publish always reaches the sink).
    pub fn prime(&mut self) {
        let snapshot = self.source.get();
        self.synchronizer.apply_snapshot(&snapshot);
        let state = self.target.get();
        self.synchronizer.publish(&state);
    }

    /// Run each pass whose input changed since it last ran.
    pub fn service(&mut self) {
        if let Some(snapshot) = self.source_watch.poll() {
            self.synchronizer.apply_snapshot(&snapshot);
        }
        if let Some(state) = self.target_watch.poll() {
            self.synchronizer.publish(&state);
        }
    }
}
