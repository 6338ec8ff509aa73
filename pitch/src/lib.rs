//! # Pitch
//!
//! Core of the pitch builder: collect seven fields describing a venture, lint them against
//! static wordlists, build prompts for a hosted model, and read its replies back into a
//! pitch or a list of suggested edits.
//!
//! ## Main modules
//!
//! - [`input`]: [`InputSet`], [`Field`]: the seven free-text fields.
//! - [`mode`]: [`AudienceMode`], [`LengthMode`]: selections that shape prompt text.
//! - [`lint`]: [`lint()`], [`Warning`]: pure wordlist checks (jargon, superlative, vague audience).
//! - [`prompt`]: [`generate_prompt`], [`iterate_prompt`]: the two prompt templates.
//! - [`interpret`]: [`interpret_pitch`], [`interpret_critique`], [`Critique`]: model reply parsing.
//! - [`suggestion`]: [`Suggestion`], [`Edit`], [`Priority`].
//! - [`drafts`]: [`DraftStore`], [`DraftEntry`]: in-memory history capped at 20.
//! - [`session`]: [`Session`]: explicit session state; begin/complete request flow.
//! - [`client`]: [`PitchGateway`] trait, [`HttpGateway`], [`MockGateway`].
//! - [`protocol`]: wire types shared with the `serve` proxy.

pub mod client;
pub mod drafts;
pub mod input;
pub mod interpret;
pub mod lint;
pub mod mode;
pub mod prompt;
pub mod protocol;
pub mod session;
pub mod suggestion;

pub use client::{GatewayError, HttpGateway, MockGateway, PitchGateway, DEFAULT_GATEWAY_URL};
pub use drafts::{DraftEntry, DraftStore, MAX_DRAFTS};
pub use input::{Field, InputSet};
pub use interpret::{interpret_critique, interpret_pitch, Critique, InterpretError};
pub use lint::{lint, Warning, WarningKind};
pub use mode::{AudienceMode, LengthMode};
pub use prompt::{generate_prompt, iterate_prompt, PromptError};
pub use session::{Action, PendingRequest, Session, SessionError, GENERATE_FAILED_PLACEHOLDER};
pub use suggestion::{Edit, Priority, Suggestion};
