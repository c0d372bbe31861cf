use crate::registry::Crypto;
use crate::yahoo::DailyClose;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One (date, coin) observation of the dashboard table.
///
/// ```json
/// {
///     "date": "2024-06-02",
///     "crypto": "BTC-USD",
///     "adj_close": 67760.805,
///     "month": 6,
///     "percent": 0.412
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub crypto: Crypto,
    pub adj_close: f64,
    pub month: u32,
    /// Day-over-day change in percent; `None` on the first day of each coin.
    pub percent: Option<f64>,
}

/// The full table, in fetch order.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct PriceFrame {
    rows: Vec<PriceRow>,
}

impl PriceFrame {
    /// Flatten fetched closes into rows, then derive `month` & `percent`.
    pub fn build(fetched: impl IntoIterator<Item = (Crypto, DailyClose)>) -> Self {
        let mut rows: Vec<PriceRow> = fetched
            .into_iter()
            .map(|(crypto, close)| PriceRow {
                date: close.date,
                crypto,
                adj_close: round3(close.adj_close),
                month: close.date.month(),
                percent: None,
            })
            .collect();

        // group row positions per coin, chronologically
        let mut groups: HashMap<Crypto, Vec<usize>> = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            groups.entry(row.crypto).or_default().push(i);
        }

        for positions in groups.values_mut() {
            positions.sort_by_key(|&i| rows[i].date);
            for pair in positions.windows(2) {
                let (prev, curr) = (rows[pair[0]].adj_close, rows[pair[1]].adj_close);
                rows[pair[1]].percent = Some(pct_change(prev, curr));
            }
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of a single coin, in fetch order.
    pub fn of(&self, crypto: Crypto) -> impl Iterator<Item = &PriceRow> {
        self.rows.iter().filter(move |row| row.crypto == crypto)
    }
}

impl From<Vec<PriceRow>> for PriceFrame {
    fn from(rows: Vec<PriceRow>) -> Self {
        Self { rows }
    }
}

/// Round to 3 decimal places.
///
/// Rounds the exact binary value with ties to even, so `67760.8125` becomes
/// `67760.812`.
pub fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

fn pct_change(prev: f64, curr: f64) -> f64 {
    (curr / prev - 1.0) * 100.0
}
