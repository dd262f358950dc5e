use std::time::Duration;

use clap::Args;
use tickdeck_core::{Config, Deck, Preset};
use tokio::sync::broadcast::error::RecvError;

use super::output::{stdin_lines, Output};
use super::CommandResult;

const RENDER_EVERY: Duration = Duration::from_millis(500);

const HELP: &str =
    "'p' = pause/resume, 'r' = reset, 'w N' / 'b N' = work/break minutes (while paused), 'q' = quit";

#[derive(Args)]
pub struct PomodoroArgs {
    /// Work minutes, 1-120
    #[arg(long)]
    work: Option<i64>,
    /// Break minutes, 1-60
    #[arg(long = "break")]
    brk: Option<i64>,
    /// Named preset: classic (25/5), extended (50/10), deep (90/20)
    #[arg(long, conflicts_with_all = ["work", "brk"])]
    preset: Option<Preset>,
    /// Wait for 'p' instead of starting right away
    #[arg(long)]
    paused: bool,
    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

pub async fn run(args: PomodoroArgs) -> CommandResult {
    let config = Config::load_or_default();
    let mut deck = Deck::from_config(&config);
    let out = Output::new(args.json);
    let pomodoro = &mut deck.pomodoro;

    if let Some(preset) = args.preset {
        pomodoro.apply_preset(preset);
    }
    if let Some(work) = args.work {
        if pomodoro.set_work_duration(work).is_none() {
            return Err(format!("work minutes must be 1-120, got {work}").into());
        }
    }
    if let Some(brk) = args.brk {
        if pomodoro.set_break_duration(brk).is_none() {
            return Err(format!("break minutes must be 1-60, got {brk}").into());
        }
    }

    let mut events = pomodoro.subscribe();
    let mut lines = stdin_lines();
    let mut render = tokio::time::interval(RENDER_EVERY);

    if !args.json {
        out.line(HELP);
    }
    if !args.paused {
        pomodoro.toggle();
    }

    loop {
        tokio::select! {
            _ = render.tick() => {
                let snap = pomodoro.snapshot();
                let state = if snap.running { "" } else { " (paused)" };
                out.status(&format!("{} {}{state}", snap.session, snap.display));
            }
            event = events.recv() => match event {
                Ok(event) => out.event(&event)?,
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let mut parts = line.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some("p"), None) => { pomodoro.toggle(); }
                    (Some("r"), None) => { pomodoro.reset(); }
                    (Some("q"), None) => break,
                    (Some("w"), Some(raw)) => {
                        if pomodoro.apply(|p| p.set_work_input(raw)).is_none() {
                            out.line("work change ignored (pause first, 1-120 minutes)");
                        }
                    }
                    (Some("b"), Some(raw)) => {
                        if pomodoro.apply(|p| p.set_break_input(raw)).is_none() {
                            out.line("break change ignored (pause first, 1-60 minutes)");
                        }
                    }
                    (None, _) => {}
                    _ => out.line(&format!("unknown command '{}' ({HELP})", line.trim())),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    pomodoro.pause();
    while let Ok(event) = events.try_recv() {
        out.event(&event)?;
    }
    out.finish();

    deck.shutdown();
    Ok(())
}
