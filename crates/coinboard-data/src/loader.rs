use crate::frame::PriceFrame;
use crate::registry::Crypto;
use crate::yahoo::HistorySource;
use chrono::{NaiveDate, Utc};
use tracing::{debug, error, info, warn};

/// First day of the dashboard's history.
pub const START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 6, 1) {
    Some(date) => date,
    None => panic!("invalid start date"),
};

/// Date range requested from the provider; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    /// From `start` up to (excluding) today, in UTC.
    pub fn since(start: NaiveDate) -> Self {
        Self {
            start,
            end: Utc::now().date_naive(),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::since(START_DATE)
    }
}

/// Fetch every coin in `cryptos`, one after another, and build the frame.
///
/// A coin whose request fails, or which comes back empty, contributes no
/// rows; the failure is logged and the remaining coins are still loaded.
pub async fn load<S: HistorySource>(source: &S, cryptos: &[Crypto], window: &Window) -> PriceFrame {
    let time = std::time::Instant::now();
    let mut fetched = Vec::new();

    for &crypto in cryptos {
        match source.daily_history(crypto, window).await {
            Ok(closes) if closes.is_empty() => {
                warn!("[{crypto}] {} returned no price data; skipping", crypto.name())
            }
            Ok(closes) => {
                debug!("[{crypto}] {} rows fetched", closes.len());
                fetched.extend(closes.into_iter().map(|close| (crypto, close)));
            }
            Err(e) => error!("[{crypto}] {} price fetch failed: {e:#}", crypto.name()),
        }
    }

    let frame = PriceFrame::build(fetched);
    info!(
        "Loaded {} price rows from {} to {}. Elapsed time: {} ms",
        frame.len(),
        window.start,
        window.end,
        time.elapsed().as_millis()
    );
    frame
}
