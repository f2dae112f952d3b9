//! Terminal driver: thin I/O glue around the session, the view and the
//! search client.
//!
//! Click with `<row> <col>` pairs, start a fresh game with `new white` /
//! `new black`, quit with `quit`. While a solver reply is outstanding no
//! input is read, so human and solver moves cannot interleave.

use std::io::BufRead;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use chess_rules::Square;
use oraclechess::{sync, ClickOutcome, GameSession, SearchClient, TerminalView};

#[derive(Parser, Debug)]
#[command(name = "oraclechess")]
struct Args {
    /// Search server endpoint.
    #[arg(long, default_value = "ws://127.0.0.1:8080")]
    server: String,

    /// Plies the solver may explore per request.
    #[arg(long, default_value_t = 2)]
    depth: u32,

    /// Seconds to wait for a solver reply before giving up on the request.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Play Black: the solver makes the opening move.
    #[arg(long)]
    black: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let search = SearchClient::new(&args.server, args.depth, Duration::from_secs(args.timeout));

    let mut session = GameSession::new();
    let mut view = TerminalView::new();

    if args.black {
        solver_reply(&mut session, &search).await;
    }
    redraw(&mut view, &session);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::New { as_black }) => {
                session.reset();
                if as_black {
                    solver_reply(&mut session, &search).await;
                }
                redraw(&mut view, &session);
            }
            Some(Command::Click(square)) => {
                let outcome = session.click(square);
                redraw(&mut view, &session);
                if let ClickOutcome::Moved { game_over, .. } = outcome {
                    if game_over {
                        println!("game over");
                    } else {
                        solver_reply(&mut session, &search).await;
                        redraw(&mut view, &session);
                        if session.is_over() {
                            println!("game over");
                        }
                    }
                }
            }
            None => println!("commands: <row> <col> | new white | new black | quit"),
        }
    }

    Ok(())
}

enum Command {
    Click(Square),
    New { as_black: bool },
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["q"] => Some(Command::Quit),
        ["new", "white"] => Some(Command::New { as_black: false }),
        ["new", "black"] => Some(Command::New { as_black: true }),
        [row, col] => {
            let row: i16 = row.parse().ok()?;
            let col: i16 = col.parse().ok()?;
            Square::try_new(row, col).ok().map(Command::Click)
        }
        _ => None,
    }
}

/// Ask the solver for the reply move and apply it. Failures are logged and
/// the request abandoned; the game keeps accepting input.
async fn solver_reply(session: &mut GameSession, search: &SearchClient) {
    match search.request_move(session.board(), session.turn()).await {
        Ok(mv) => {
            session.apply_trusted(mv);
        }
        Err(err) => warn!(%err, "search request failed"),
    }
}

fn redraw(view: &mut TerminalView, session: &GameSession) {
    sync(view, session);
    print!("{}", view.render());
}
