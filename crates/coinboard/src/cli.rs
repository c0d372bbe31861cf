use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use coinboard_data::START_DATE;
use coinboard_web::PORT;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing
    #[arg(long, global = true, default_value = "INFO", ignore_case = true)]
    pub trace: TraceLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the price history, then serve the dashboard.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = PORT)]
        port: u16,

        /// First day of history to load (YYYY-MM-DD).
        #[arg(long, default_value_t = START_DATE)]
        start: NaiveDate,
    },

    /// Load the price history and print it to stdout as JSON.
    Fetch {
        /// First day of history to load (YYYY-MM-DD).
        #[arg(long, default_value_t = START_DATE)]
        start: NaiveDate,

        /// Only fetch this ticker, e.g. BTC-USD.
        #[arg(long)]
        crypto: Option<String>,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum TraceLevel {
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::parse_from(["coinboard", "serve"]);
        assert_eq!(cli.trace, TraceLevel::INFO);
        match cli.command {
            Commands::Serve { host, port, start } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8049);
                assert_eq!(start, START_DATE);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn fetch_with_options() {
        let cli = Cli::parse_from([
            "coinboard",
            "fetch",
            "--start",
            "2024-09-01",
            "--crypto",
            "ETH-USD",
            "--trace",
            "DEBUG",
        ]);
        assert_eq!(cli.trace, TraceLevel::DEBUG);
        match cli.command {
            Commands::Fetch { start, crypto } => {
                assert_eq!(start, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
                assert_eq!(crypto.as_deref(), Some("ETH-USD"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(Cli::try_parse_from(["coinboard", "fetch", "--start", "june"]).is_err());
    }
}
