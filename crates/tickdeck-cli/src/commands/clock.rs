use chrono::Local;
use clap::Args;
use serde::Serialize;
use tickdeck_core::{ClockFace, Config, Quote, QuoteFetcher};

use super::CommandResult;

#[derive(Args)]
pub struct ClockArgs {
    /// Also fetch a quote of the day
    #[arg(long)]
    quote: bool,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ClockOutput {
    #[serde(flatten)]
    face: ClockFace,
    #[serde(skip_serializing_if = "Option::is_none")]
    quote: Option<Quote>,
}

pub async fn run(args: ClockArgs) -> CommandResult {
    let config = Config::load_or_default();
    let now = Local::now();
    let face = ClockFace::at(now.naive_local(), &config.clock.name);

    let quote = if args.quote && config.quote.enabled {
        let fetcher = QuoteFetcher::from_config(&config.quote);
        Some(fetcher.fetch(now.date_naive()).await)
    } else {
        None
    };

    if args.json {
        let output = ClockOutput { face, quote };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", face.greeting);
    println!("{}", face.time);
    println!("{}", face.date);
    println!(
        "hands: hour {:.1}°, minute {:.1}°, second {:.1}°",
        face.hour_angle, face.minute_angle, face.second_angle
    );
    if let Some(quote) = quote {
        println!();
        println!("{}", quote.text);
    }
    Ok(())
}
