use std::time::Duration;

use clap::Args;
use tickdeck_core::{Config, Deck, Event};
use tokio::sync::broadcast::error::RecvError;

use super::output::Output;
use super::CommandResult;

const RENDER_EVERY: Duration = Duration::from_millis(250);

#[derive(Args)]
pub struct CountdownArgs {
    /// Minutes, 0-59 (defaults to countdown.minutes from config)
    minutes: Option<String>,
    /// Seconds, 0-59 (defaults to countdown.seconds from config)
    seconds: Option<String>,
    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

pub async fn run(args: CountdownArgs) -> CommandResult {
    let config = Config::load_or_default();
    let mut deck = Deck::from_config(&config);
    let out = Output::new(args.json);

    let countdown = &mut deck.countdown;
    if let Some(raw) = &args.minutes {
        if !countdown.set_minutes_input(raw) {
            tracing::warn!("minutes '{raw}' out of range 0-59, using {}", countdown.snapshot().minutes_input);
        }
    }
    if let Some(raw) = &args.seconds {
        if !countdown.set_seconds_input(raw) {
            tracing::warn!("seconds '{raw}' out of range 0-59, using {}", countdown.snapshot().seconds_input);
        }
    }

    let mut events = countdown.subscribe();
    if countdown.start_pending().is_none() {
        out.line("Nothing to count down.");
        return Ok(());
    }

    let mut render = tokio::time::interval(RENDER_EVERY);
    loop {
        tokio::select! {
            _ = render.tick() => out.status(&countdown.snapshot().display),
            event = events.recv() => match event {
                Ok(event) => {
                    out.event(&event)?;
                    if matches!(event, Event::CountdownFinished { .. }) {
                        break;
                    }
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                if let Some(event) = countdown.pause() {
                    out.event(&event)?;
                }
                break;
            }
        }
    }

    out.finish();
    deck.shutdown();
    Ok(())
}
