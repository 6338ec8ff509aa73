//! Argument groups shared by the `lint`, `generate` and `iterate` subcommands.

use std::path::{Path, PathBuf};

use pitch::{AudienceMode, Field, InputSet, LengthMode};

use crate::CliError;

/// The seven input fields as flags. `--inputs FILE` loads a JSON object first; flags given
/// on the command line override its values.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON file with any of: company_name, offering, audience, problem, outcome,
    /// differentiator, analogy
    #[arg(long, value_name = "FILE")]
    pub inputs: Option<PathBuf>,

    /// Company name (e.g. "Acme")
    #[arg(long, value_name = "TEXT")]
    pub company: Option<String>,

    /// What you offer (e.g. "a scheduling app")
    #[arg(long, value_name = "TEXT")]
    pub offering: Option<String>,

    /// Who it is for (e.g. "freelance photographers")
    #[arg(long = "target", value_name = "TEXT")]
    pub target_audience: Option<String>,

    /// The problem you solve
    #[arg(long, value_name = "TEXT")]
    pub problem: Option<String>,

    /// The outcome customers get
    #[arg(long, value_name = "TEXT")]
    pub outcome: Option<String>,

    /// What sets you apart (optional)
    #[arg(long, value_name = "TEXT")]
    pub differentiator: Option<String>,

    /// "X for Y" analogy (optional)
    #[arg(long, value_name = "TEXT")]
    pub analogy: Option<String>,
}

impl InputArgs {
    fn flag_values(&self) -> [(Field, Option<&String>); 7] {
        [
            (Field::CompanyName, self.company.as_ref()),
            (Field::Offering, self.offering.as_ref()),
            (Field::Audience, self.target_audience.as_ref()),
            (Field::Problem, self.problem.as_ref()),
            (Field::Outcome, self.outcome.as_ref()),
            (Field::Differentiator, self.differentiator.as_ref()),
            (Field::Analogy, self.analogy.as_ref()),
        ]
    }

    pub fn to_input_set(&self) -> Result<InputSet, CliError> {
        let mut inputs = match &self.inputs {
            Some(path) => read_input_file(path)?,
            None => InputSet::default(),
        };
        for (field, value) in self.flag_values() {
            if let Some(v) = value {
                inputs.set(field, v.as_str());
            }
        }
        Ok(inputs)
    }
}

fn read_input_file(path: &Path) -> Result<InputSet, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::InputFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| CliError::InputFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Audience and length selection.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Reader framing: investor, customer, partner, press, casual
    #[arg(long, value_name = "MODE", default_value_t = AudienceMode::default())]
    pub audience: AudienceMode,

    /// Target length: 6words, 10words, sentence, full
    #[arg(long, value_name = "MODE", default_value_t = LengthMode::default())]
    pub length: LengthMode,
}

/// Proxy endpoint override.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GatewayArgs {
    /// Proxy endpoint (default: PITCH_GATEWAY_URL or http://127.0.0.1:8787/api/generate)
    #[arg(long, value_name = "URL")]
    pub gateway: Option<String>,
}

impl GatewayArgs {
    pub fn build(&self) -> pitch::HttpGateway {
        match &self.gateway {
            Some(url) => pitch::HttpGateway::new(url.as_str()),
            None => pitch::HttpGateway::from_env(),
        }
    }
}
