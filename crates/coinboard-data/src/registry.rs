use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel symbol selecting every tracked coin at once.
pub const ALL: &str = "ALL";

/// Statically defined crypto tickers, quoted in USD.
///
/// The declaration order is the fetch order, and therefore the row order of
/// the loaded frame.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Crypto {
    #[serde(rename = "BTC-USD")]
    Bitcoin,
    #[serde(rename = "BNB-USD")]
    BinanceCoin,
    #[serde(rename = "BCH-USD")]
    BitcoinCash,
    #[serde(rename = "DOGE-USD")]
    Dogecoin,
    #[serde(rename = "ETH-USD")]
    Ethereum,
    #[serde(rename = "SOL-USD")]
    Solana,
    #[serde(rename = "USDT-USD")]
    Tether,
    #[serde(rename = "XMR-USD")]
    Monero,
    #[serde(rename = "XRP-USD")]
    Ripple,
}

impl Crypto {
    pub const ALL: [Crypto; 9] = [
        Crypto::Bitcoin,
        Crypto::BinanceCoin,
        Crypto::BitcoinCash,
        Crypto::Dogecoin,
        Crypto::Ethereum,
        Crypto::Solana,
        Crypto::Tether,
        Crypto::Monero,
        Crypto::Ripple,
    ];

    /// Ticker symbol, as understood by Yahoo Finance.
    pub fn symbol(&self) -> &'static str {
        match self {
            Crypto::Bitcoin => "BTC-USD",
            Crypto::BinanceCoin => "BNB-USD",
            Crypto::BitcoinCash => "BCH-USD",
            Crypto::Dogecoin => "DOGE-USD",
            Crypto::Ethereum => "ETH-USD",
            Crypto::Solana => "SOL-USD",
            Crypto::Tether => "USDT-USD",
            Crypto::Monero => "XMR-USD",
            Crypto::Ripple => "XRP-USD",
        }
    }

    /// Human readable name shown in the dashboard dropdown.
    pub fn name(&self) -> &'static str {
        match self {
            Crypto::Bitcoin => "Bitcoin",
            Crypto::BinanceCoin => "Binance Coin",
            Crypto::BitcoinCash => "Bitcoin Cash",
            Crypto::Dogecoin => "Dogecoin",
            Crypto::Ethereum => "Ethereum",
            Crypto::Solana => "Solana",
            Crypto::Tether => "Tether",
            Crypto::Monero => "Monero",
            Crypto::Ripple => "Ripple",
        }
    }

    /// CSS color name every chart trace of this coin is drawn with.
    pub fn color(&self) -> &'static str {
        match self {
            Crypto::Bitcoin => "blue",
            Crypto::BinanceCoin => "orange",
            Crypto::BitcoinCash => "cyan",
            Crypto::Dogecoin => "red",
            Crypto::Ethereum => "gold",
            Crypto::Solana => "lightgreen",
            Crypto::Tether => "purple",
            Crypto::Monero => "white",
            Crypto::Ripple => "gray",
        }
    }
}

impl fmt::Display for Crypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Crypto {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Crypto::ALL
            .into_iter()
            .find(|crypto| crypto.symbol() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown crypto ticker: {s}"))
    }
}
