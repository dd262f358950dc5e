//! Daily quote for the clock panel.
//!
//! Tries a verse-of-the-day endpoint, then a random endpoint, then the same
//! random endpoint seeded by today's date, and finally settles on a fixed
//! verse. Attempts run one after another; the caller always gets a quote.

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::QuoteError;
use crate::storage::QuoteConfig;

pub const FALLBACK_QUOTE: &str = "\"For I know the plans I have for you, declares the Lord, \
plans to prosper you and not to harm you, to give you hope and a future.\" - Jeremiah 29:11";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteOrigin {
    VerseOfTheDay,
    Random,
    Seeded,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub origin: QuoteOrigin,
}

impl Quote {
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_QUOTE.to_string(),
            origin: QuoteOrigin::Fallback,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VotdEntry {
    bookname: String,
    chapter: String,
    verse: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct RandomVerse {
    text: String,
    reference: String,
}

pub struct QuoteFetcher {
    client: Client,
    primary_url: String,
    secondary_url: String,
}

impl QuoteFetcher {
    pub fn new(primary_url: impl Into<String>, secondary_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("quote client build failed, using defaults: {e}");
                Client::new()
            });
        Self {
            client,
            primary_url: primary_url.into(),
            secondary_url: secondary_url.into(),
        }
    }

    pub fn from_config(config: &QuoteConfig) -> Self {
        Self::new(
            config.primary_url.clone(),
            config.secondary_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Fetch a quote for `today`, falling back through every source.
    pub async fn fetch(&self, today: NaiveDate) -> Quote {
        match self.verse_of_the_day().await {
            Ok(text) => return Quote { text, origin: QuoteOrigin::VerseOfTheDay },
            Err(e) => tracing::warn!("verse of the day unavailable: {e}"),
        }

        match self.random(None).await {
            Ok(text) => return Quote { text, origin: QuoteOrigin::Random },
            Err(e) => tracing::warn!("random verse unavailable: {e}"),
        }

        match self.random(Some(date_seed(today))).await {
            Ok(text) => return Quote { text, origin: QuoteOrigin::Seeded },
            Err(e) => tracing::warn!("seeded verse unavailable: {e}"),
        }

        Quote::fallback()
    }

    async fn verse_of_the_day(&self) -> Result<String, QuoteError> {
        let entries: Vec<VotdEntry> = self.get_json(Url::parse(&self.primary_url)?).await?;
        let first = entries
            .into_iter()
            .next()
            .ok_or_else(|| QuoteError::Malformed("empty verse list".into()))?;
        Ok(format!(
            "\"{}\" - {} {}:{}",
            first.text, first.bookname, first.chapter, first.verse
        ))
    }

    async fn random(&self, seed: Option<i32>) -> Result<String, QuoteError> {
        let mut url = Url::parse(&self.secondary_url)?;
        if let Some(seed) = seed {
            url.query_pairs_mut().append_pair("seed", &seed.to_string());
        }
        let verse: RandomVerse = self.get_json(url).await?;
        Ok(format!("\"{}\" - {}", verse.text.trim(), verse.reference))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, QuoteError> {
        let resp = self.client.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(QuoteError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| QuoteError::Malformed(e.to_string()))
    }
}

/// Day-of-month + zero-based month * 31 + year.
pub fn date_seed(date: NaiveDate) -> i32 {
    date.day() as i32 + date.month0() as i32 * 31 + date.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_uses_zero_based_month() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(date_seed(date), 4 + 2 * 31 + 2025);
    }

    #[test]
    fn fallback_is_jeremiah() {
        let quote = Quote::fallback();
        assert_eq!(quote.origin, QuoteOrigin::Fallback);
        assert!(quote.text.ends_with("- Jeremiah 29:11"));
        assert!(quote.text.contains("declares the Lord, plans to prosper you"));
    }
}
