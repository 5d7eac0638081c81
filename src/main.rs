//! Roshambo Binary
//!
//! Plays stone, paper, scissors against the computer until you decline
//! another round. The cumulative score is saved after every round.
//!
//! Options: --scores, --name, --mode, --fast, --seed, --reset, --plain

use clap::Parser;
use roshambo::*;
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    log();
    let args = Args::parse();
    match play(&args) {
        Ok(summary) => {
            log::info!("{} rounds, verdict {}", summary.rounds, summary.verdict);
            ExitCode::SUCCESS
        }
        Err(e) if matches!(e.downcast_ref::<Error>(), Some(Error::InputClosed)) => {
            log::info!("input closed, leaving");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn play(args: &Args) -> anyhow::Result<Summary> {
    if args.plain {
        colored::control::set_override(false);
    }
    let store = args.store();
    let path = store.path().to_path_buf();
    let screen = args.screen(std::io::stdout());
    let result = match std::io::stdin().is_terminal() {
        true => Session::new(Terminal, store, Human, args.robot(), screen)
            .mode(args.mode)
            .name(args.name.as_str())
            .reset(args.reset)
            .run(),
        false => Session::new(
            Lines::new(std::io::stdin().lock(), std::io::stdout()),
            store,
            Human,
            args.robot(),
            screen,
        )
        .mode(args.mode)
        .name(args.name.as_str())
        .reset(args.reset)
        .run(),
    };
    match result {
        Err(e @ Error::Persistence(_)) => Err(unsaved(e, &path)),
        result => Ok(result?),
    }
}

fn unsaved(e: Error, path: &std::path::Path) -> anyhow::Error {
    anyhow::Error::new(e).context(format!("could not save score to {}", path.display()))
}
