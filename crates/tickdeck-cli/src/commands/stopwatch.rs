use std::time::Duration;

use clap::Args;
use tickdeck_core::{format_milliseconds, Deck};
use tokio::sync::broadcast::error::RecvError;

use super::output::{stdin_lines, Output};
use super::CommandResult;

const RENDER_EVERY: Duration = Duration::from_millis(100);

const HELP: &str = "Enter or 'l' = lap, 'p' = pause/resume, 'r' = reset, 'q' = quit";

#[derive(Args)]
pub struct StopwatchArgs {
    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

pub async fn run(args: StopwatchArgs) -> CommandResult {
    let mut deck = Deck::new();
    let out = Output::new(args.json);
    let stopwatch = &mut deck.stopwatch;

    let mut events = stopwatch.subscribe();
    let mut lines = stdin_lines();
    let mut render = tokio::time::interval(RENDER_EVERY);

    if !args.json {
        out.line(HELP);
    }
    stopwatch.start();

    loop {
        tokio::select! {
            _ = render.tick() => out.status(&stopwatch.snapshot().display),
            event = events.recv() => match event {
                Ok(event) => out.event(&event)?,
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "" | "l" => { stopwatch.lap(); }
                    "p" => {
                        if stopwatch.snapshot().running {
                            stopwatch.pause();
                        } else {
                            stopwatch.start();
                        }
                    }
                    "r" => { stopwatch.reset(); }
                    "q" => break,
                    other => out.line(&format!("unknown command '{other}' ({HELP})")),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    stopwatch.pause();
    // Flush anything raised by the final commands.
    while let Ok(event) = events.try_recv() {
        out.event(&event)?;
    }
    out.finish();

    let snapshot = stopwatch.snapshot();
    if !args.json {
        out.line(&format!("Total: {}", snapshot.display));
        for (i, lap) in snapshot.laps.iter().enumerate() {
            out.line(&format!("  Lap {}: {}", i + 1, format_milliseconds(*lap)));
        }
    }

    deck.shutdown();
    Ok(())
}
