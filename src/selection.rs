//! Selected-constellation state with last-request-wins fetch ordering.
//!
//! The UI owns the selection; this tracker only decides which detail fetches
//! to start and which finished fetches may be applied. Every selection change
//! hands out a [`FetchTicket`] stamped with a new generation. When a fetch
//! completes, its result is applied only if its ticket is still the latest;
//! anything older is discarded, so a slow response for a previous selection
//! can never overwrite a newer one.
//!
//! ```
//! use starchart::{FetchOutcome, SelectionTracker};
//!
//! let mut selection = SelectionTracker::new();
//! let orion = selection.select("Orion").unwrap();
//! let lyra = selection.select("Lyra").unwrap();
//!
//! // Orion's response arrives late and is dropped
//! assert!(matches!(selection.complete(&orion, Ok("orion")), FetchOutcome::Stale));
//! assert!(matches!(selection.complete(&lyra, Ok("lyra")), FetchOutcome::Apply("lyra")));
//! ```

use tracing::{debug, warn};

use crate::error::ChartError;
use crate::narrative::NavigationAction;

/// Identifies one detail fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub name: String,
}

/// What to do with a finished fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// Latest fetch succeeded: hand the payload to the engine.
    Apply(T),
    /// A newer selection superseded this fetch; ignore it.
    Stale,
    /// Latest fetch failed; show "no data available" and skip the engine.
    Unavailable(ChartError),
}

#[derive(Debug, Default)]
pub struct SelectionTracker {
    current: Option<String>,
    generation: u64,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected constellation, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Change the selection.
    ///
    /// Returns a ticket for the one fetch the caller should start, or `None`
    /// if `name` is already selected (or blank, which is treated as a clear).
    pub fn select(&mut self, name: &str) -> Option<FetchTicket> {
        let name = name.trim();
        if name.is_empty() {
            self.clear();
            return None;
        }
        if self.current.as_deref() == Some(name) {
            return None;
        }
        self.generation += 1;
        self.current = Some(name.to_string());
        debug!("Selected {} (generation {})", name, self.generation);
        Some(FetchTicket {
            generation: self.generation,
            name: name.to_string(),
        })
    }

    /// Drop the selection. Fetches still in flight become stale.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            self.generation += 1;
            debug!("Selection cleared (generation {})", self.generation);
        }
    }

    /// Route an action produced by an activated cross-reference.
    pub fn handle_action(&mut self, action: NavigationAction) -> Option<FetchTicket> {
        match action {
            NavigationAction::SelectConstellation(name) => self.select(&name),
        }
    }

    /// Whether `ticket` belongs to the most recent selection.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
            && self.current.as_deref() == Some(ticket.name.as_str())
    }

    /// Resolve a finished fetch against the current selection.
    pub fn complete<T>(
        &self,
        ticket: &FetchTicket,
        result: Result<T, ChartError>,
    ) -> FetchOutcome<T> {
        if !self.is_current(ticket) {
            debug!(
                "Discarding stale response for {} (generation {} < {})",
                ticket.name, ticket.generation, self.generation
            );
            return FetchOutcome::Stale;
        }
        match result {
            Ok(payload) => FetchOutcome::Apply(payload),
            Err(err) => {
                warn!("Fetching {} failed: {}", ticket.name, err);
                FetchOutcome::Unavailable(err)
            }
        }
    }
}
