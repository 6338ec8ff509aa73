//! `pitch` binary: build a short venture pitch from the command line.
//!
//! Subcommands: `serve` (proxy gateway), `lint`, `generate`, `iterate`, `repl`.

mod repl;

use clap::{Parser, Subcommand};
use cli::{render, to_json_string, CliError, GatewayArgs, InputArgs, ModeArgs};
use pitch::{lint, Session};
use repl::run_repl_loop;

#[derive(Parser, Debug)]
#[command(name = "pitch")]
#[command(about = "Pitch builder: lint inputs, draft and critique a one-line pitch")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// Print machine-readable JSON (lint, generate, iterate)
    #[arg(long, global = true)]
    json: bool,

    /// With --json, pretty-print (multi-line). Default: compact, one line
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run the proxy gateway (http://127.0.0.1:8787); the API key stays on the server
    Serve(ServeArgs),
    /// Check the inputs for jargon, superlatives and vague audiences
    Lint(LintArgs),
    /// Draft a pitch from the inputs through the proxy
    Generate(GenerateArgs),
    /// Critique an existing pitch through the proxy
    Iterate(IterateArgs),
    /// Interactive session: set fields, generate, iterate, keep drafts
    Repl(GatewayArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address (default 127.0.0.1:8787)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
struct LintArgs {
    #[command(flatten)]
    inputs: InputArgs,
}

#[derive(clap::Args, Debug, Clone)]
struct GenerateArgs {
    #[command(flatten)]
    inputs: InputArgs,
    #[command(flatten)]
    modes: ModeArgs,
    #[command(flatten)]
    gateway: GatewayArgs,
}

#[derive(clap::Args, Debug, Clone)]
struct IterateArgs {
    /// The pitch to critique
    #[arg(long, value_name = "TEXT")]
    pitch: String,
    /// Company name, for context in the critique
    #[arg(long, value_name = "TEXT")]
    company: Option<String>,
    #[command(flatten)]
    modes: ModeArgs,
    #[command(flatten)]
    gateway: GatewayArgs,
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", to_json_string(value, pretty)?);
    std::io::Write::flush(&mut std::io::stdout())?;
    Ok(())
}

fn run_lint(args: &LintArgs, json: bool, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    session.inputs = args.inputs.to_input_set()?;
    let warnings = lint(&session.inputs);
    let questions = session.clarity_questions();
    if json {
        return print_json(&render::lint_json(&warnings, &questions), pretty);
    }
    println!("{}", render::warnings(&warnings));
    if !questions.is_empty() {
        println!("{}", render::clarity_questions(&questions));
    }
    Ok(())
}

/// Returns whether a pitch was drafted; the caller turns `false` into a non-zero exit.
async fn run_generate(
    args: &GenerateArgs,
    json: bool,
    pretty: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut session = Session::new();
    session.inputs = args.inputs.to_input_set()?;
    session.audience = args.modes.audience;
    session.length = args.modes.length;
    if let Some(missing) = session.inputs.first_missing() {
        return Err(CliError::Usage(format!(
            "missing required input: {} (--{})",
            missing.label(),
            if missing == pitch::Field::Audience { "target" } else { missing.id() }
        ))
        .into());
    }

    let gateway = args.gateway.build();
    tracing::debug!(url = gateway.url(), "generate");
    let ok = session.generate(&gateway).await?;
    if json {
        print_json(&render::generate_json(&session, ok), pretty)?;
    } else if ok {
        println!("{}", session.pitch);
        eprintln!("{}", render::word_count(&session));
    } else {
        eprintln!("{}", session.pitch);
    }
    Ok(ok)
}

async fn run_iterate(
    args: &IterateArgs,
    json: bool,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    session.pitch = args.pitch.clone();
    if let Some(company) = &args.company {
        session.inputs.company_name = company.clone();
    }
    session.audience = args.modes.audience;
    session.length = args.modes.length;

    let gateway = args.gateway.build();
    let suggestions = session.iterate(&gateway).await?;
    if json {
        print_json(&render::iterate_json(suggestions), pretty)?;
    } else {
        println!("{}", render::suggestions(suggestions));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let applied = config::load_and_apply("pitch", None::<&std::path::Path>);
    let _log_guard = config::tracing_init::init()?;
    match applied {
        Ok(keys) => tracing::debug!(?keys, "applied config"),
        Err(e) => tracing::warn!(error = %e, "config not loaded"),
    }

    let args = Args::parse();

    match &args.cmd {
        Command::Serve(sa) => {
            if let Err(e) = serve::run_serve(sa.addr.as_deref()).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Lint(la) => run_lint(la, args.json, args.pretty)?,
        Command::Generate(ga) => match run_generate(ga, args.json, args.pretty).await {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("pitch: {}", e);
                std::process::exit(2);
            }
        },
        Command::Iterate(ia) => {
            if let Err(e) = run_iterate(ia, args.json, args.pretty).await {
                eprintln!("pitch: {}", e);
                std::process::exit(2);
            }
        }
        Command::Repl(gw) => {
            let gateway = gw.build();
            run_repl_loop(&gateway).await?;
        }
    }
    Ok(())
}
