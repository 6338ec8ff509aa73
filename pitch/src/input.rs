//! Input set: the seven free-text fields describing a venture.
//!
//! Read by the linter ([`crate::lint`]) and the prompt builder ([`crate::prompt`]).
//! A field counts as present when its value is a non-empty string.

use serde::{Deserialize, Serialize};

/// One named field of the [`InputSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CompanyName,
    Offering,
    Audience,
    Problem,
    Outcome,
    Differentiator,
    Analogy,
}

impl Field {
    /// All fields in form order. The first five are required.
    pub const ALL: [Field; 7] = [
        Field::CompanyName,
        Field::Offering,
        Field::Audience,
        Field::Problem,
        Field::Outcome,
        Field::Differentiator,
        Field::Analogy,
    ];

    /// Fields that must be non-empty before a pitch can be generated.
    pub const REQUIRED: [Field; 5] = [
        Field::CompanyName,
        Field::Offering,
        Field::Audience,
        Field::Problem,
        Field::Outcome,
    ];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Stable id used by the CLI (`set <id> <value>`) and in JSON output.
    pub fn id(self) -> &'static str {
        match self {
            Field::CompanyName => "company",
            Field::Offering => "offering",
            Field::Audience => "audience",
            Field::Problem => "problem",
            Field::Outcome => "outcome",
            Field::Differentiator => "differentiator",
            Field::Analogy => "analogy",
        }
    }

    /// Question shown when asking for this field.
    pub fn label(self) -> &'static str {
        match self {
            Field::CompanyName => "Company Name",
            Field::Offering => "What are you building?",
            Field::Audience => "Who is it for?",
            Field::Problem => "What problem are you solving?",
            Field::Outcome => "What outcome do you enable?",
            Field::Differentiator => "What makes you different?",
            Field::Analogy => "Simple analogy (optional)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::CompanyName => "e.g., Airbnb",
            Field::Offering => "e.g., a website and mobile app for booking accommodations",
            Field::Audience => "e.g., travelers looking for affordable, unique places to stay",
            Field::Problem => {
                "e.g., hotels are expensive and impersonal, while spare rooms sit empty"
            }
            Field::Outcome => {
                "e.g., book unique local homes and earn money by sharing extra space"
            }
            Field::Differentiator => "e.g., verified reviews, secure payments, and host guarantees",
            Field::Analogy => "e.g., like eBay for renting spare rooms",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            Field::CompanyName => "Just your company name.",
            Field::Offering => "Describe the type of product simply.",
            Field::Audience => "Be specific about demographics or role.",
            Field::Problem => "Describe the pain point or gap in the market.",
            Field::Outcome => "Focus on what they can now do or achieve.",
            Field::Differentiator => "Your unique approach or technology.",
            Field::Analogy => "Helps with casual explanations.",
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Field::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .or(match s.as_str() {
                "company_name" | "name" => Some(Field::CompanyName),
                "secret_sauce" => Some(Field::Differentiator),
                _ => None,
            })
            .ok_or_else(|| {
                format!(
                    "unknown field: {} (use company, offering, audience, problem, outcome, differentiator, or analogy)",
                    s
                )
            })
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Current values of all seven fields. Empty string means "not filled in".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSet {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub offering: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub differentiator: String,
    #[serde(default)]
    pub analogy: String,
}

impl InputSet {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CompanyName => &self.company_name,
            Field::Offering => &self.offering,
            Field::Audience => &self.audience,
            Field::Problem => &self.problem,
            Field::Outcome => &self.outcome,
            Field::Differentiator => &self.differentiator,
            Field::Analogy => &self.analogy,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::CompanyName => &mut self.company_name,
            Field::Offering => &mut self.offering,
            Field::Audience => &mut self.audience,
            Field::Problem => &mut self.problem,
            Field::Outcome => &mut self.outcome,
            Field::Differentiator => &mut self.differentiator,
            Field::Analogy => &mut self.analogy,
        };
        *slot = value.into();
    }

    /// First required field that is still empty, in form order.
    pub fn first_missing(&self) -> Option<Field> {
        Field::REQUIRED
            .into_iter()
            .find(|f| self.get(*f).is_empty())
    }

    /// True when every required field is non-empty.
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// All field values joined by a single space, in form order (linter input).
    pub fn joined(&self) -> String {
        Field::ALL
            .iter()
            .map(|f| self.get(*f))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
