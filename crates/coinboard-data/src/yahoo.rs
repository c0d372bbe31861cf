use crate::loader::Window;
use crate::registry::Crypto;
use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use tracing::{error, trace};

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Daily adjusted closes, per ticker
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

/// One trading day of a single coin, as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyClose {
    pub date: NaiveDate,
    pub adj_close: f64,
}

/// Anything able to deliver the daily price history of a coin.
pub trait HistorySource {
    fn daily_history(
        &self,
        crypto: Crypto,
        window: &Window,
    ) -> impl Future<Output = anyhow::Result<Vec<DailyClose>>> + Send;
}

/// Yahoo Finance chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooFinance {
    client: Client,
    base_url: String,
}

impl YahooFinance {
    pub const BASE_URL: &'static str = "https://query1.finance.yahoo.com";

    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, Self::BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, crypto: Crypto, window: &Window) -> String {
        let tckr = crypto.symbol();
        format!(
            "{}/v8/finance/chart/{tckr}?period1={}&period2={}&interval=1d&events=div|split",
            self.base_url,
            unix_midnight(window.start),
            unix_midnight(window.end),
        )
    }
}

impl HistorySource for YahooFinance {
    async fn daily_history(
        &self,
        crypto: Crypto,
        window: &Window,
    ) -> anyhow::Result<Vec<DailyClose>> {
        let url = self.url(crypto, window);
        trace!("Fetching price data for [{crypto}] {} from Yahoo Finance", crypto.name());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("[{crypto}] price fetching error\nURL: {url}"))?
            .error_for_status()?
            .bytes()
            .await
            .with_context(|| format!("[{crypto}] failed to read response body"))?;

        trace!("Deserializing price data for [{crypto}] from Yahoo Finance");
        decode(crypto, &response)
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Decode a chart payload into the adjusted closes it carries.
///
/// Days where Yahoo reports a `null` adjusted close are skipped.
pub fn decode(crypto: Crypto, body: &[u8]) -> anyhow::Result<Vec<DailyClose>> {
    let de: PriceHistory = serde_json::from_slice(body)
        .with_context(|| format!("[{crypto}] deserialization error"))?;

    if let Some(err) = de.chart.error {
        anyhow::bail!("[{crypto}] Yahoo Finance error {}: {}", err.code, err.description);
    }

    let Some(base) = de.chart.result.and_then(|data| data.into_iter().next()) else {
        error!("[{crypto}] contained no \"chart.result\" object");
        return Ok(vec![]);
    };

    let adjclose = base
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|cell| cell.adjclose)
        .unwrap_or_default();

    base.timestamp
        .iter()
        .zip(adjclose)
        .filter_map(|(timestamp, adj_close)| adj_close.map(|adj_close| (*timestamp, adj_close)))
        .map(|(timestamp, adj_close)| -> anyhow::Result<DailyClose> {
            let date = DateTime::from_timestamp(timestamp, 0)
                .with_context(|| format!("[{crypto}] invalid timestamp {timestamp}"))?
                .date_naive();
            Ok(DailyClose { date, adj_close })
        })
        .collect()
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Deserialization
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize, Debug)]
struct PriceHistory {
    chart: PriceResponse,
}

#[derive(Deserialize, Debug)]
struct PriceResponse {
    result: Option<Vec<PriceCategories>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize, Debug)]
struct PriceCategories {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    #[serde(default)]
    adjclose: Vec<AdjClose>,
}

#[derive(Deserialize, Debug)]
struct AdjClose {
    adjclose: Vec<Option<f64>>,
}
