//! Browser dashboard over the loaded price table.
//!
//! Every interaction of the page is a single GET: the dropdowns ask
//! `/api/figure` for a Plotly figure, the quiz asks `/api/investor-level` for
//! a label. Both are answered by [`Dashboard::dispatch`].
pub mod api;
pub mod chart;
pub mod dashboard;
pub mod page;
pub mod quiz;
pub mod server;

pub use dashboard::{Dashboard, Event, Output};
pub use server::{configure, serve, PORT};
