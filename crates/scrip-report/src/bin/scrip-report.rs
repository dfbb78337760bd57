//! Indian Stock Market Report CLI
//!
//! Reads one ticker symbol from stdin, asks the scraping agent for the
//! stock's data, prints a console table plus recent news, and saves a
//! markdown report in the working directory.
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables
//! export GROQ_API_KEY="gsk_..."
//! export GROQ_MODEL="llama-3.3-70b-versatile"
//!
//! # Run the report tool
//! cargo run --bin scrip-report -p scrip-report
//! ```
//!
//! Every failure is reported on the console and the process still
//! exits normally; there is nothing to salvage from a partial run.

use scrip_llm::providers::{GroqConfig, GroqProvider};
use scrip_report::agent::ScrapeAgent;
use scrip_report::config::ScrapeConfig;
use scrip_report::{render, symbol, writer};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::error;

fn read_symbol() -> anyhow::Result<Option<String>> {
    print!("Enter the Indian stock symbol (e.g., RELIANCE, TCS, INFY): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(symbol::sanitize_input(&line))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn,scrip_report=info".to_string()),
        )
        .init();

    let Some(stock_symbol) = read_symbol()? else {
        println!("No stock symbol provided. Exiting.");
        return Ok(());
    };

    let agent = match build_agent() {
        Ok(agent) => agent,
        Err(e) => {
            error!("startup failed: {e}");
            eprintln!("{e}");
            return Ok(());
        }
    };

    match agent.scrape(&stock_symbol).await {
        Ok(report) => {
            println!("\n📊 Indian Stock Market Data 📊\n");
            println!("{}", render::render_table(&report));

            if let Some(news) = render::render_news(&report) {
                println!("\n📰 Latest Financial News 📰\n");
                println!("{news}");
            }

            match writer::write_report(&report, &stock_symbol, Path::new(".")) {
                Ok(path) => println!("\n📄 Stock report saved as: {}", path.display()),
                Err(e) => {
                    // Storage failures do not fail the run; the table
                    // was already shown.
                    error!("failed to store report: {e}");
                    eprintln!("{e}");
                }
            }
        }
        Err(e) => {
            error!("scrape failed: {e}");
            eprintln!("{e}");
            println!("No data available.");
        }
    }

    Ok(())
}

/// Build the scraping agent from environment configuration
fn build_agent() -> scrip_report::Result<ScrapeAgent> {
    let groq_config = GroqConfig::from_env()?;
    let provider = Arc::new(GroqProvider::with_config(groq_config)?);
    let config = ScrapeConfig::from_env()?;

    Ok(ScrapeAgent::new(provider, config))
}
