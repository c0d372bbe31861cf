//! Price data behind the dashboard.
//! ```rust,ignore
//! let yf = YahooFinance::new(reqwest::Client::new());
//! let frame = loader::load(&yf, &Crypto::ALL, &Window::default()).await;
//! ```
pub mod frame;
pub mod loader;
pub mod registry;
pub mod yahoo;

pub use frame::{PriceFrame, PriceRow};
pub use loader::{load, Window, START_DATE};
pub use registry::{Crypto, ALL};
pub use yahoo::{DailyClose, HistorySource, YahooFinance};
