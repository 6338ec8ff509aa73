//! Audience and length selections. Each affects prompt text only.

use serde::{Deserialize, Serialize};

/// Intended reader of the pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceMode {
    #[default]
    Investor,
    Customer,
    Partner,
    Press,
    Casual,
}

impl AudienceMode {
    pub const ALL: [AudienceMode; 5] = [
        AudienceMode::Investor,
        AudienceMode::Customer,
        AudienceMode::Partner,
        AudienceMode::Press,
        AudienceMode::Casual,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AudienceMode::Investor => "investor",
            AudienceMode::Customer => "customer",
            AudienceMode::Partner => "partner",
            AudienceMode::Press => "press",
            AudienceMode::Casual => "casual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AudienceMode::Investor => "Investors",
            AudienceMode::Customer => "Customers",
            AudienceMode::Partner => "Partners",
            AudienceMode::Press => "Press",
            AudienceMode::Casual => "Casual",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AudienceMode::Investor => "Focus on opportunity & traction",
            AudienceMode::Customer => "Focus on their problem & solution",
            AudienceMode::Partner => "Focus on mutual value",
            AudienceMode::Press => "Focus on the story angle",
            AudienceMode::Casual => "Simple, relatable explanation",
        }
    }
}

impl std::str::FromStr for AudienceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "investor" | "investors" => Ok(Self::Investor),
            "customer" | "customers" => Ok(Self::Customer),
            "partner" | "partners" => Ok(Self::Partner),
            "press" => Ok(Self::Press),
            "casual" => Ok(Self::Casual),
            _ => Err(format!(
                "unknown audience: {} (use investor, customer, partner, press, or casual)",
                s
            )),
        }
    }
}

impl std::fmt::Display for AudienceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Target brevity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthMode {
    #[serde(rename = "6words")]
    SixWords,
    #[serde(rename = "10words")]
    TenWords,
    #[default]
    #[serde(rename = "sentence")]
    Sentence,
    #[serde(rename = "full")]
    Full,
}

impl LengthMode {
    pub const ALL: [LengthMode; 4] = [
        LengthMode::SixWords,
        LengthMode::TenWords,
        LengthMode::Sentence,
        LengthMode::Full,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LengthMode::SixWords => "6words",
            LengthMode::TenWords => "10words",
            LengthMode::Sentence => "sentence",
            LengthMode::Full => "full",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthMode::SixWords => "6 Words",
            LengthMode::TenWords => "10 Words",
            LengthMode::Sentence => "One Sentence",
            LengthMode::Full => "Two Sentences",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LengthMode::SixWords => "Tagline / Twitter bio",
            LengthMode::TenWords => "Memorable hook",
            LengthMode::Sentence => "~20 words, full context",
            LengthMode::Full => "With specific example",
        }
    }

    /// Soft upper bound on word count, shown next to the live word count.
    pub fn max_words(self) -> usize {
        match self {
            LengthMode::SixWords => 6,
            LengthMode::TenWords => 10,
            LengthMode::Sentence => 25,
            LengthMode::Full => 50,
        }
    }
}

impl std::str::FromStr for LengthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "6words" | "6" => Ok(Self::SixWords),
            "10words" | "10" => Ok(Self::TenWords),
            "sentence" => Ok(Self::Sentence),
            "full" => Ok(Self::Full),
            _ => Err(format!(
                "unknown length: {} (use 6words, 10words, sentence, or full)",
                s
            )),
        }
    }
}

impl std::fmt::Display for LengthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
