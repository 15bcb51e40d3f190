//! Navigation-sink doubles.

// Lock poisoning only occurs after a panic; treat it as unrecoverable.
#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tether_core::{NavigateOptions, SinkError, TextSink};

/// Sink that records every applied form for later assertions.
///
/// Clones share one record, so a test can keep a handle while moving the
/// sink into a synchronizer.
#[derive(Clone, Default)]
pub struct RecordingSink {
    applied: Arc<Mutex<Vec<(String, NavigateOptions)>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every applied form with its options, oldest first.
    pub fn applied(&self) -> Vec<(String, NavigateOptions)> {
        self.applied
            .lock()
            .expect("recording sink lock poisoned")
            .clone()
    }

    /// Just the rendered forms, oldest first.
    pub fn forms(&self) -> Vec<String> {
        self.applied()
            .into_iter()
            .map(|(form, _)| form)
            .collect()
    }

    /// The most recently applied form.
    pub fn last(&self) -> Option<String> {
        self.forms().pop()
    }

    /// Number of sink applications so far.
    pub fn len(&self) -> usize {
        self.applied
            .lock()
            .expect("recording sink lock poisoned")
            .len()
    }

    /// Whether nothing has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TextSink for RecordingSink {
    fn apply(&mut self, rendered: &str, options: &NavigateOptions) -> Result<(), SinkError> {
        self.applied
            .lock()
            .expect("recording sink lock poisoned")
            .push((rendered.to_owned(), options.clone()));
        Ok(())
    }
}

/// Sink that rejects every application.
#[derive(Clone, Default)]
pub struct FailingSink {
    attempts: Arc<AtomicUsize>,
}

impl FailingSink {
    /// Create a failing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many applications were attempted.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Acquire)
    }
}

impl TextSink for FailingSink {
    fn apply(&mut self, _rendered: &str, _options: &NavigateOptions) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::Release);
        Err(SinkError::navigation("scripted sink failure"))
    }
}
