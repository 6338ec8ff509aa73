//! Session state: everything one user edits, passed by reference to each handler.
//!
//! Derived values ([`Session::warnings`], [`Session::word_count`],
//! [`Session::clarity_questions`]) are computed on read and never cached.
//!
//! Model calls are split into `begin_*` (validate, build prompt, mark in flight) and
//! `complete_*` (apply the result) so an event loop can run the request elsewhere.
//! At most one request is in flight per session: a second `begin_*` fails with
//! [`SessionError::Busy`] instead of racing on the shared pitch. [`Session::generate`] and
//! [`Session::iterate`] run both halves against a [`PitchGateway`]; dropping either future
//! before the gateway answers releases the session again.

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::client::{GatewayError, PitchGateway};
use crate::drafts::{DraftEntry, DraftStore};
use crate::input::InputSet;
use crate::interpret::{interpret_critique, interpret_pitch, Critique};
use crate::lint::{lint, Warning, VAGUE_AUDIENCE_TERMS};
use crate::mode::{AudienceMode, LengthMode};
use crate::prompt::{
    generate_prompt, iterate_prompt, PromptError, GENERATE_MAX_TOKENS, ITERATE_MAX_TOKENS,
};
use crate::suggestion::Suggestion;

/// Pitch text shown when a generate request fails.
pub const GENERATE_FAILED_PLACEHOLDER: &str = "Error generating pitch. Please try again.";

/// Pitches longer than this many words trigger the "more concisely" clarity question.
const CONCISE_WORD_LIMIT: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Generate,
    Iterate,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Generate => "generate",
            Action::Iterate => "iterate",
        })
    }
}

/// A request ready to send: returned by `begin_*`, answered with `complete_*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub action: Action,
    pub prompt: String,
    pub max_tokens: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("a {0} request is already in flight")]
    Busy(Action),
    #[error("no {0} request is in flight")]
    NotInFlight(Action),
    #[error("no suggestion at position {0}")]
    NoSuchSuggestion(usize),
    #[error("there is no rewritten version to apply")]
    NoRewrite,
    #[error("no draft with id {0}")]
    NoSuchDraft(Uuid),
}

/// Clears the in-flight slot if the owning future is dropped mid-request.
struct InFlightGuard<'a> {
    slot: &'a mut Option<Action>,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(slot: &'a mut Option<Action>) -> Self {
        Self { slot, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            if let Some(action) = self.slot.take() {
                tracing::debug!(%action, "request abandoned before completion");
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    pub inputs: InputSet,
    pub audience: AudienceMode,
    pub length: LengthMode,
    /// Current editable pitch; starts empty, set by generation, freely edited after.
    pub pitch: String,
    suggestions: Vec<Suggestion>,
    drafts: DraftStore,
    in_flight: Option<Action>,
    has_generated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    pub fn in_flight(&self) -> Option<Action> {
        self.in_flight
    }

    /// True once a pitch was generated or restored from a draft.
    pub fn has_generated(&self) -> bool {
        self.has_generated
    }

    pub fn warnings(&self) -> Vec<Warning> {
        lint(&self.inputs)
    }

    pub fn word_count(&self) -> usize {
        self.pitch.split_whitespace().count()
    }

    pub fn can_generate(&self) -> bool {
        self.in_flight.is_none() && self.inputs.is_complete()
    }

    pub fn can_iterate(&self) -> bool {
        self.in_flight.is_none() && !self.pitch.is_empty()
    }

    /// Questions a reader would likely ask after reading the current inputs and pitch.
    pub fn clarity_questions(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.inputs.offering.to_lowercase().contains("platform") {
            out.push("What kind of platform exactly?");
        }
        let audience = self.inputs.audience.to_lowercase();
        if !audience.is_empty() && VAGUE_AUDIENCE_TERMS.iter().any(|t| audience.contains(t)) {
            out.push("Who specifically are you targeting?");
        }
        if self.inputs.differentiator.is_empty() {
            out.push("What makes this different from existing solutions?");
        }
        if self.word_count() > CONCISE_WORD_LIMIT {
            out.push("Can you say this more concisely?");
        }
        out
    }

    fn mark_in_flight(&mut self, action: Action) -> Result<(), SessionError> {
        match self.in_flight {
            Some(busy) => Err(SessionError::Busy(busy)),
            None => {
                self.in_flight = Some(action);
                Ok(())
            }
        }
    }

    fn finish(&mut self, action: Action) -> Result<(), SessionError> {
        if self.in_flight != Some(action) {
            return Err(SessionError::NotInFlight(action));
        }
        self.in_flight = None;
        Ok(())
    }

    /// Validates inputs and builds the generate prompt. Clears the suggestion list.
    pub fn begin_generate(&mut self) -> Result<PendingRequest, SessionError> {
        if let Some(busy) = self.in_flight {
            return Err(SessionError::Busy(busy));
        }
        let prompt = generate_prompt(&self.inputs, self.audience, self.length)?;
        self.mark_in_flight(Action::Generate)?;
        self.suggestions.clear();
        Ok(PendingRequest {
            action: Action::Generate,
            prompt,
            max_tokens: GENERATE_MAX_TOKENS,
        })
    }

    /// Applies a generate result. Returns `Ok(true)` when a pitch was drafted; on any
    /// failure the pitch becomes [`GENERATE_FAILED_PLACEHOLDER`] and `Ok(false)` is returned.
    pub fn complete_generate(
        &mut self,
        outcome: Result<Value, GatewayError>,
    ) -> Result<bool, SessionError> {
        self.finish(Action::Generate)?;
        let drafted = outcome
            .map_err(|e| e.to_string())
            .and_then(|v| interpret_pitch(&v).map_err(|e| e.to_string()));
        match drafted {
            Ok(pitch) => {
                self.pitch = pitch;
                self.has_generated = true;
                Ok(true)
            }
            Err(reason) => {
                tracing::warn!(%reason, "generate failed");
                self.pitch = GENERATE_FAILED_PLACEHOLDER.to_string();
                Ok(false)
            }
        }
    }

    /// Builds the critique prompt for the current pitch.
    pub fn begin_iterate(&mut self) -> Result<PendingRequest, SessionError> {
        if let Some(busy) = self.in_flight {
            return Err(SessionError::Busy(busy));
        }
        let prompt = iterate_prompt(
            &self.pitch,
            &self.inputs.company_name,
            self.audience,
            self.length,
        )?;
        self.mark_in_flight(Action::Iterate)?;
        Ok(PendingRequest {
            action: Action::Iterate,
            prompt,
            max_tokens: ITERATE_MAX_TOKENS,
        })
    }

    /// Replaces the suggestion list wholesale with the critique result. Failures become one
    /// synthetic high-priority suggestion.
    pub fn complete_iterate(
        &mut self,
        outcome: Result<Value, GatewayError>,
    ) -> Result<&[Suggestion], SessionError> {
        self.finish(Action::Iterate)?;
        let critique = match outcome {
            Ok(v) => interpret_critique(&v),
            Err(e) => Critique::Failed(e.to_string()),
        };
        if let Critique::Failed(reason) = &critique {
            tracing::warn!(%reason, "iterate failed");
        }
        self.suggestions = critique.into_suggestions();
        Ok(&self.suggestions)
    }

    /// Runs a full generate round trip through `gateway`.
    pub async fn generate(&mut self, gateway: &dyn PitchGateway) -> Result<bool, SessionError> {
        let req = self.begin_generate()?;
        let outcome = {
            let mut guard = InFlightGuard::new(&mut self.in_flight);
            let outcome = gateway.complete(&req.prompt, req.max_tokens).await;
            guard.disarm();
            outcome
        };
        self.complete_generate(outcome)
    }

    /// Runs a full iterate round trip through `gateway`.
    pub async fn iterate(
        &mut self,
        gateway: &dyn PitchGateway,
    ) -> Result<&[Suggestion], SessionError> {
        let req = self.begin_iterate()?;
        let outcome = {
            let mut guard = InFlightGuard::new(&mut self.in_flight);
            let outcome = gateway.complete(&req.prompt, req.max_tokens).await;
            guard.disarm();
            outcome
        };
        self.complete_iterate(outcome)
    }

    /// Applies suggestion `index`: an edit replaces the first occurrence of its original
    /// phrase; the rewrite replaces the whole pitch (see [`Session::apply_rewrite`]).
    pub fn apply_suggestion(&mut self, index: usize) -> Result<(), SessionError> {
        let suggestion = self
            .suggestions
            .get(index)
            .ok_or(SessionError::NoSuchSuggestion(index))?;
        match suggestion {
            Suggestion::Edit(edit) => {
                if !edit.original.is_empty() {
                    self.pitch = self.pitch.replacen(&edit.original, &edit.replacement, 1);
                }
                Ok(())
            }
            Suggestion::Rewrite { .. } => self.apply_rewrite(),
        }
    }

    /// Replaces the pitch with the rewritten version and clears the suggestion list.
    pub fn apply_rewrite(&mut self) -> Result<(), SessionError> {
        let rewrite = self
            .suggestions
            .iter()
            .find_map(Suggestion::as_rewrite)
            .ok_or(SessionError::NoRewrite)?
            .to_string();
        self.pitch = rewrite;
        self.suggestions.clear();
        Ok(())
    }

    /// Saves the current pitch and modes. No-op (returns `None`) when the pitch is empty.
    pub fn save_draft(&mut self) -> Option<&DraftEntry> {
        self.drafts.save(&self.pitch, self.audience, self.length)
    }

    pub fn remove_draft(&mut self, id: Uuid) -> bool {
        self.drafts.remove(id)
    }

    /// Copies a draft's pitch and modes back into the live state. The draft stays saved.
    pub fn restore_draft(&mut self, id: Uuid) -> Result<(), SessionError> {
        let entry = self.drafts.get(id).ok_or(SessionError::NoSuchDraft(id))?;
        self.pitch = entry.pitch.clone();
        self.audience = entry.audience;
        self.length = entry.length;
        self.has_generated = true;
        Ok(())
    }
}
