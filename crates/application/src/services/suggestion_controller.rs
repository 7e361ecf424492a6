//! Suggestion controller
//!
//! Keeps the query and the suggestion list of each address field. Every
//! keystroke starts a new lookup; requests are never cancelled, so each one
//! carries a per-field sequence number and a response is only applied when
//! it is newer than the last one applied. Short queries and selections move
//! the applied mark forward, which discards anything still in flight.

use std::sync::Arc;

use domain::DomainError;
use domain::value_objects::AddressField;
use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::services::geocoding_service::GeocodingService;

#[derive(Debug, Default)]
struct FieldState {
    query: String,
    suggestions: Vec<String>,
    issued_seq: u64,
    applied_seq: u64,
}

impl FieldState {
    /// Issue the next sequence number; callers hold the field lock
    const fn next_seq(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }
}

/// Result of applying a suggestion response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// The list was replaced with the response
    Applied,
    /// A newer input or a selection already superseded this response
    Stale,
}

/// Per-field suggestion state machine (`Idle -> Fetching -> Idle`)
#[derive(Debug)]
pub struct SuggestionController {
    geocoding: Arc<GeocodingService>,
    origin: Mutex<FieldState>,
    destination: Mutex<FieldState>,
}

impl SuggestionController {
    pub fn new(geocoding: Arc<GeocodingService>) -> Self {
        Self {
            geocoding,
            origin: Mutex::default(),
            destination: Mutex::default(),
        }
    }

    const fn slot(&self, field: AddressField) -> &Mutex<FieldState> {
        match field {
            AddressField::Origin => &self.origin,
            AddressField::Destination => &self.destination,
        }
    }

    /// Handle a keystroke: store the text and refresh the suggestion list
    #[instrument(skip(self))]
    pub async fn on_input(&self, field: AddressField, text: &str) -> SuggestionOutcome {
        let slot = self.slot(field);
        let seq = {
            let mut state = slot.lock();
            state.query = text.to_string();
            state.next_seq()
        };

        let suggestions = self.geocoding.suggest(text).await;

        let mut state = slot.lock();
        if seq <= state.applied_seq {
            debug!(seq, applied = state.applied_seq, "Discarding stale suggestions");
            return SuggestionOutcome::Stale;
        }
        state.suggestions = suggestions;
        state.applied_seq = seq;
        debug!(seq, count = state.suggestions.len(), "Suggestions applied");
        SuggestionOutcome::Applied
    }

    /// Accept a candidate: it becomes the field value and the list is cleared
    #[instrument(skip(self))]
    pub fn on_select(&self, field: AddressField, candidate: &str) {
        let mut state = self.slot(field).lock();
        let seq = state.next_seq();
        state.query = candidate.to_string();
        state.suggestions.clear();
        state.applied_seq = seq;
    }

    /// Accept the candidate at `index` of the current list
    ///
    /// # Errors
    ///
    /// Returns a validation error if the list has no such entry.
    pub fn select_index(&self, field: AddressField, index: usize) -> Result<String, ApplicationError> {
        let candidate = self
            .slot(field)
            .lock()
            .suggestions
            .get(index)
            .cloned()
            .ok_or_else(|| {
                DomainError::ValidationError(format!(
                    "no suggestion {} for {field}",
                    index + 1
                ))
            })?;
        self.on_select(field, &candidate);
        Ok(candidate)
    }

    /// Current text of a field
    pub fn query(&self, field: AddressField) -> String {
        self.slot(field).lock().query.clone()
    }

    /// Current suggestion list of a field
    pub fn suggestions(&self, field: AddressField) -> Vec<String> {
        self.slot(field).lock().suggestions.clone()
    }
}
