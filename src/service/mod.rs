// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Debounced suggestion service.
//!
//! Wraps the engine for interactive use: each history change restarts a
//! quiet-interval timer, and only the latest request ever publishes. Results
//! go out on a `watch` channel so a UI can always read the current
//! suggestion.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::engine::{Suggestion, SuggestionEngine};
use crate::music::{MusicalEvent, Quantization};
use crate::theory::Genre;

/// Everything the engine needs for one suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub history: Vec<MusicalEvent>,
    pub genre: Genre,
    pub bpm: u32,
    pub quantization: Quantization,
    pub base_octave: i32,
}

impl SuggestionRequest {
    pub fn new(history: Vec<MusicalEvent>, genre: Genre) -> Self {
        Self {
            history,
            genre,
            bpm: 120,
            quantization: Quantization::Quarter,
            base_octave: 4,
        }
    }
}

/// Wait `latency`, then compute a suggestion with a fresh entropy-seeded generator
pub async fn suggest_delayed(
    engine: &SuggestionEngine,
    request: &SuggestionRequest,
    latency: Duration,
) -> Option<Suggestion> {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    engine.suggest_with_entropy(
        &request.history,
        request.genre,
        request.bpm,
        request.quantization,
        request.base_octave,
    )
}

/// Owns at most one pending request; a new one supersedes it
pub struct SuggestionService {
    engine: Arc<SuggestionEngine>,
    debounce: Duration,
    latency: Duration,
    generation: Arc<AtomicU64>,
    sender: Arc<watch::Sender<Option<Suggestion>>>,
    pending: Option<JoinHandle<()>>,
}

impl SuggestionService {
    /// Create a service and the receiver its suggestions are published on.
    ///
    /// Timing comes from the engine's configuration.
    pub fn new(engine: SuggestionEngine) -> (Self, watch::Receiver<Option<Suggestion>>) {
        let (sender, receiver) = watch::channel(None);
        let debounce = engine.config().debounce();
        let latency = engine.config().latency();
        let service = Self {
            engine: Arc::new(engine),
            debounce,
            latency,
            generation: Arc::new(AtomicU64::new(0)),
            sender: Arc::new(sender),
            pending: None,
        };
        (service, receiver)
    }

    /// Another receiver for the published suggestion
    pub fn subscribe(&self) -> watch::Receiver<Option<Suggestion>> {
        self.sender.subscribe()
    }

    /// Currently published suggestion
    pub fn current(&self) -> Option<Suggestion> {
        self.sender.borrow().clone()
    }

    /// The history changed: drop any pending work and schedule a new suggestion.
    ///
    /// Must be called from within a tokio runtime.
    pub fn history_changed(&mut self, request: SuggestionRequest) {
        self.cancel();

        let generation = self.generation.load(Ordering::SeqCst);
        let current = Arc::clone(&self.generation);
        let engine = Arc::clone(&self.engine);
        let sender = Arc::clone(&self.sender);
        let debounce = self.debounce;
        let latency = self.latency;

        tracing::debug!(generation, events = request.history.len(), "scheduling suggestion");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let suggestion = suggest_delayed(&engine, &request, latency).await;
            // Generation is compared under the channel lock that cancel() also takes
            let published = sender.send_if_modified(|slot| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *slot = suggestion;
                true
            });
            if published {
                tracing::debug!(generation, "published suggestion");
            } else {
                tracing::debug!(generation, "discarding superseded suggestion");
            }
        }));
    }

    /// Abort pending work and clear the published suggestion.
    ///
    /// The generation bump must precede the clear: a task that already
    /// finished computing checks the generation under the channel lock.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.sender.send_replace(None);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for SuggestionService {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
