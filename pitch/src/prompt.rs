//! Prompt templates for the two model tasks: drafting a pitch and critiquing one.
//!
//! Does not perform I/O. Callers send the result through a [`crate::client::PitchGateway`]
//! with [`GENERATE_MAX_TOKENS`] or [`ITERATE_MAX_TOKENS`].

use thiserror::Error;

use crate::input::{Field, InputSet};
use crate::mode::{AudienceMode, LengthMode};

/// Token budget for a generate request.
pub const GENERATE_MAX_TOKENS: u32 = 300;
/// Token budget for an iterate request (JSON with several suggestions).
pub const ITERATE_MAX_TOKENS: u32 = 600;

const DIFFERENTIATOR_PLACEHOLDER: &str = "not specified";
const ANALOGY_PLACEHOLDER: &str = "not provided";

/// Why a prompt could not be built. The action stays disabled; no request is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("required field is empty: {0}")]
    MissingField(Field),
    #[error("there is no pitch to iterate on")]
    EmptyPitch,
}

/// Length instruction embedded in the generate prompt.
pub fn length_instruction(length: LengthMode) -> &'static str {
    match length {
        LengthMode::SixWords => "exactly 6 words or fewer, a punchy tagline",
        LengthMode::TenWords => "approximately 10 words, a memorable hook",
        LengthMode::Sentence => "one clear sentence of about 15-25 words",
        LengthMode::Full => {
            "two sentences: the first explains what you do, the second gives a specific vivid example"
        }
    }
}

/// Short length target embedded in the iterate prompt.
pub fn length_target(length: LengthMode) -> &'static str {
    match length {
        LengthMode::SixWords => "6 words",
        LengthMode::TenWords => "10 words",
        LengthMode::Sentence => "one sentence",
        LengthMode::Full => "two sentences",
    }
}

/// Reader framing embedded in the generate prompt.
pub fn audience_framing(audience: AudienceMode) -> &'static str {
    match audience {
        AudienceMode::Investor => {
            "an investor who cares about market opportunity, clarity, and why this will succeed"
        }
        AudienceMode::Customer => {
            "a potential customer who wants to know how this solves their problem"
        }
        AudienceMode::Partner => {
            "a potential partner interested in mutual value and collaboration opportunities"
        }
        AudienceMode::Press => "a journalist looking for a compelling human-interest angle",
        AudienceMode::Casual => {
            "someone at a party who just asked \"what do you do?\", keep it relatable and jargon-free"
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Builds the prompt that asks the model for a fresh pitch.
///
/// # Errors
///
/// Returns [`PromptError::MissingField`] naming the first empty required field.
pub fn generate_prompt(
    inputs: &InputSet,
    audience: AudienceMode,
    length: LengthMode,
) -> Result<String, PromptError> {
    if let Some(field) = inputs.first_missing() {
        return Err(PromptError::MissingField(field));
    }

    Ok(format!(
        r#"You are an expert startup pitch coach trained on Y Combinator, Founder Institute, and Sequoia Capital methodologies.

A founder needs help crafting a startup introduction. Here are their inputs:

Company Name: {company}
What they're building: {offering}
Target audience: {audience}
Problem they're solving: {problem}
Outcome they enable: {outcome}
What makes them unique: {differentiator}
Simple analogy: {analogy}

TASK: Write a {length} pitch tailored for {framing}.

CRITICAL RULES:
1. The pitch must flow naturally as a complete, polished sentence, NOT a fill-in-the-blank template
2. NO buzzwords like "platform", "leverage", "synergy", "disrupt", "innovative", "revolutionary"
3. NO superlatives like "first", "only", "best", "leading"
4. Be specific and concrete, avoid vague language
5. If the length is "6 words" or "10 words", be ruthlessly concise
6. For "casual" audience, use the analogy if provided and make it conversational
7. For "investor" audience, emphasize clarity about what the company does
8. The pitch should be immediately understandable by someone with no context

OUTPUT: Return ONLY the pitch text, nothing else. No quotes, no explanation, no preamble."#,
        company = inputs.company_name,
        offering = inputs.offering,
        audience = inputs.audience,
        problem = inputs.problem,
        outcome = inputs.outcome,
        differentiator = or_placeholder(&inputs.differentiator, DIFFERENTIATOR_PLACEHOLDER),
        analogy = or_placeholder(&inputs.analogy, ANALOGY_PLACEHOLDER),
        length = length_instruction(length),
        framing = audience_framing(audience),
    ))
}

/// Builds the critique prompt for the current pitch. The model is asked for strict JSON
/// (`suggestions` array plus `improvedVersion`), parsed by [`crate::interpret::interpret_critique`].
///
/// # Errors
///
/// Returns [`PromptError::EmptyPitch`] when `pitch` is empty.
pub fn iterate_prompt(
    pitch: &str,
    company_name: &str,
    audience: AudienceMode,
    length: LengthMode,
) -> Result<String, PromptError> {
    if pitch.is_empty() {
        return Err(PromptError::EmptyPitch);
    }

    Ok(format!(
        r#"You are an expert startup pitch coach. Analyze this pitch and suggest specific improvements.

CURRENT PITCH: "{pitch}"

CONTEXT:
- Company: {company}
- Target length: {length}
- Target audience: {audience}

TASK: Provide 3-4 specific, actionable suggestions to improve this pitch. For each suggestion:
1. Identify the specific word or phrase to change
2. Explain why it should change (too vague, jargon, too long, unclear, etc.)
3. Provide a concrete alternative

Also provide one fully rewritten "improved version" that incorporates all suggestions.

FORMAT YOUR RESPONSE AS JSON:
{{
  "suggestions": [
    {{
      "original": "the specific word or phrase",
      "issue": "brief explanation of the problem",
      "replacement": "suggested replacement",
      "priority": "high" or "medium" or "low"
    }}
  ],
  "improvedVersion": "the complete rewritten pitch"
}}

Return ONLY valid JSON, no other text."#,
        pitch = pitch,
        company = company_name,
        length = length_target(length),
        audience = audience.id(),
    ))
}
