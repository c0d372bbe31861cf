use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands::*, TraceLevel};
use coinboard_data::{self as data, Crypto, Window, YahooFinance};
use coinboard_web::Dashboard;
use dotenv::{dotenv, var};
use tracing::{debug, info, trace, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

fn preprocess(trace_level: Level) {
    dotenv().ok();
    FmtSubscriber::builder().with_max_level(trace_level).init();
}

// Yahoo rejects requests without a browser-like user agent
fn http_client() -> Result<reqwest::Client> {
    let user_agent = var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    debug!("Using user agent: {user_agent}");
    let client = reqwest::ClientBuilder::new()
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.trace {
        TraceLevel::DEBUG => Level::DEBUG,
        TraceLevel::INFO => Level::INFO,
        TraceLevel::WARN => Level::WARN,
        TraceLevel::ERROR => Level::ERROR,
    };

    preprocess(log_level);
    trace!("Command line input recorded: {cli:#?}");

    ////////////////////////////////////////////////////////////////////////////////////////////////////

    // cli framework:
    // "> coinboard <COMMAND>"
    match cli.command {
        // "> coinboard serve [--host] [--port] [--start]"
        // load every coin, then serve the dashboard
        Serve { host, port, start } => {
            let window = Window::since(start);
            let yf = YahooFinance::new(http_client()?);

            info!("Fetching price history from {} to {}", window.start, window.end);
            let frame = data::load(&yf, &Crypto::ALL, &window).await;

            coinboard_web::serve(Dashboard::new(frame, window), &host, port).await?;
        }

        // "> coinboard fetch [--start] [--crypto]"
        // load the table and dump it to stdout
        Fetch { start, crypto } => {
            let cryptos = match crypto {
                Some(symbol) => vec![symbol.parse::<Crypto>()?],
                None => Crypto::ALL.to_vec(),
            };
            let window = Window::since(start);
            let yf = YahooFinance::new(http_client()?);

            let frame = data::load(&yf, &cryptos, &window).await;
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
    }

    Ok(())
}
