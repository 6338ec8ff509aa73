//! Interactive session commands: parse one input line, run it against a [`Session`].
//!
//! Kept out of the binary so it can be driven with a [`pitch::MockGateway`] in tests.

use pitch::{AudienceMode, Field, LengthMode, PitchGateway, Session};
use uuid::Uuid;

use crate::render;
use crate::CliError;

pub const HELP: &str = "\
Commands:
  set <field> [text]   set a field (company, offering, audience, problem, outcome,
                       differentiator, analogy); no text clears it
  audience <mode>      investor, customer, partner, press, casual
  length <mode>        6words, 10words, sentence, full
  fields               what each field asks for, with an example
  show                 fields, modes and current pitch
  lint                 warnings and clarity questions
  generate             draft a pitch from the fields
  iterate              critique the current pitch
  apply <n>            apply suggestion n
  rewrite              replace the pitch with the suggested rewrite
  edit <text>          replace the pitch by hand
  save                 save the pitch as a draft
  drafts               list saved drafts
  restore <n|id>       load a draft back into the session
  delete <n|id>        delete a draft
  help                 this text
  quit                 leave";

/// A draft addressed by its 1-based list position or its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftRef {
    Position(usize),
    Id(Uuid),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Set(Field, String),
    Audience(AudienceMode),
    Length(LengthMode),
    Fields,
    Show,
    Lint,
    Generate,
    Iterate,
    Apply(usize),
    Rewrite,
    Edit(String),
    Save,
    Drafts,
    Restore(DraftRef),
    Delete(DraftRef),
    Help,
    Quit,
}

fn parse_position(arg: &str, what: &str) -> Result<usize, CliError> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CliError::Usage(format!("{} needs a number from 1", what))),
    }
}

fn need<'a>(rest: &'a str, name: &str) -> Result<&'a str, CliError> {
    if rest.is_empty() {
        Err(CliError::Usage(format!("{} needs an argument", name)))
    } else {
        Ok(rest)
    }
}

fn parse_draft_ref(arg: &str) -> Result<DraftRef, CliError> {
    let arg = arg.trim();
    if let Ok(id) = Uuid::parse_str(arg) {
        return Ok(DraftRef::Id(id));
    }
    parse_position(arg, "draft").map(DraftRef::Position)
}

impl ReplCommand {
    /// Parses one line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let cmd = match word.to_lowercase().as_str() {
            "set" => {
                let arg = need(rest, "set")?;
                let (name, value) = match arg.split_once(char::is_whitespace) {
                    Some((n, v)) => (n, v.trim()),
                    None => (arg, ""),
                };
                let field = name.parse::<Field>().map_err(CliError::Usage)?;
                Self::Set(field, value.to_string())
            }
            "audience" => Self::Audience(need(rest, "audience")?.parse().map_err(CliError::Usage)?),
            "length" => Self::Length(need(rest, "length")?.parse().map_err(CliError::Usage)?),
            "fields" => Self::Fields,
            "show" => Self::Show,
            "lint" => Self::Lint,
            "generate" | "gen" => Self::Generate,
            "iterate" | "critique" => Self::Iterate,
            "apply" => Self::Apply(parse_position(need(rest, "apply")?, "apply")?),
            "rewrite" => Self::Rewrite,
            "edit" => Self::Edit(need(rest, "edit")?.to_string()),
            "save" => Self::Save,
            "drafts" => Self::Drafts,
            "restore" => Self::Restore(parse_draft_ref(need(rest, "restore")?)?),
            "delete" => Self::Delete(parse_draft_ref(need(rest, "delete")?)?),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "/quit" => Self::Quit,
            other => {
                return Err(CliError::Usage(format!(
                    "unknown command: {} (try `help`)",
                    other
                )))
            }
        };
        Ok(Some(cmd))
    }
}

fn resolve_draft(session: &Session, r: &DraftRef) -> Result<Uuid, CliError> {
    match r {
        DraftRef::Id(id) => Ok(*id),
        DraftRef::Position(n) => session
            .drafts()
            .iter()
            .nth(n.saturating_sub(1))
            .filter(|_| *n >= 1)
            .map(|d| d.id)
            .ok_or_else(|| CliError::Usage(format!("no draft number {}", n))),
    }
}

fn lint_report(session: &Session) -> String {
    let questions = session.clarity_questions();
    let mut out = render::warnings(&session.warnings());
    if !questions.is_empty() {
        out.push('\n');
        out.push_str(&render::clarity_questions(&questions));
    }
    out
}

/// Runs `cmd` and returns the text to print. [`ReplCommand::Quit`] is handled by the caller.
pub async fn execute(
    session: &mut Session,
    gateway: &dyn PitchGateway,
    cmd: ReplCommand,
) -> Result<String, CliError> {
    match cmd {
        ReplCommand::Set(field, value) => {
            session.inputs.set(field, value);
            let warnings = session.warnings();
            Ok(if warnings.is_empty() {
                format!("{} updated.", field.id())
            } else {
                format!("{} updated.\n{}", field.id(), render::warnings(&warnings))
            })
        }
        ReplCommand::Audience(mode) => {
            session.audience = mode;
            Ok(format!("Audience: {} ({})", mode.label(), mode.description()))
        }
        ReplCommand::Length(mode) => {
            session.length = mode;
            Ok(format!("Length: {} ({})", mode.label(), mode.description()))
        }
        ReplCommand::Fields => Ok(render::fields()),
        ReplCommand::Show => Ok(render::session(session)),
        ReplCommand::Lint => Ok(lint_report(session)),
        ReplCommand::Generate => {
            if let Some(missing) = session.inputs.first_missing() {
                return Err(CliError::Usage(format!(
                    "fill in {} first (set {} ...)",
                    missing.label(),
                    missing.id()
                )));
            }
            session.generate(gateway).await?;
            Ok(format!(
                "Pitch: {}\n{}",
                session.pitch,
                render::word_count(session)
            ))
        }
        ReplCommand::Iterate => {
            let list = session.iterate(gateway).await?;
            Ok(render::suggestions(list))
        }
        ReplCommand::Apply(n) => {
            let index = n
                .checked_sub(1)
                .ok_or_else(|| CliError::Usage("apply needs a number from 1".to_string()))?;
            session.apply_suggestion(index)?;
            Ok(format!("Pitch: {}", session.pitch))
        }
        ReplCommand::Rewrite => {
            session.apply_rewrite()?;
            Ok(format!("Pitch: {}", session.pitch))
        }
        ReplCommand::Edit(text) => {
            session.pitch = text;
            Ok(render::word_count(session))
        }
        ReplCommand::Save => Ok(match session.save_draft() {
            Some(d) => format!("Saved draft {}.", d.id),
            None => "Nothing to save yet.".to_string(),
        }),
        ReplCommand::Drafts => Ok(render::drafts(session.drafts())),
        ReplCommand::Restore(r) => {
            let id = resolve_draft(session, &r)?;
            session.restore_draft(id)?;
            Ok(format!("Restored: {}", session.pitch))
        }
        ReplCommand::Delete(r) => {
            let id = resolve_draft(session, &r)?;
            Ok(if session.remove_draft(id) {
                "Draft deleted.".to_string()
            } else {
                "No such draft.".to_string()
            })
        }
        ReplCommand::Help => Ok(HELP.to_string()),
        ReplCommand::Quit => Ok(String::new()),
    }
}
