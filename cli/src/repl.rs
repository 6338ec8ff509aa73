//! Interactive session loop: read stdin, run one command against the session, print, repeat
//! until EOF or `quit`.

use std::io::Write;

use cli::{execute, ReplCommand};
use pitch::{PitchGateway, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Runs the REPL loop with a fresh session.
///
/// Exits on EOF (Ctrl+D) or `quit`/`exit`/`/quit`. Command errors are printed to stderr and
/// the loop continues.
pub async fn run_repl_loop(gateway: &dyn PitchGateway) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    println!("Pitch builder. Type `help` for commands.");
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = reader.next_line().await? else {
            break;
        };

        let cmd = match ReplCommand::parse(&line) {
            Ok(Some(ReplCommand::Quit)) => break,
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match execute(&mut session, gateway, cmd).await {
            Ok(out) if out.is_empty() => {}
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("error: {}", e),
        }
    }

    println!("Bye.");
    Ok(())
}
