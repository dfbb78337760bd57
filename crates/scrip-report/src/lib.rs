//! Indian stock market report pipeline
//!
//! This crate turns one ticker symbol into a console table and a
//! markdown report. The heavy lifting - scraping NSE India, BSE India,
//! Moneycontrol, and Economic Times and reconciling their numbers -
//! is delegated to a hosted language model configured with scraping
//! and financial-data tools; this crate only asks the question, decodes
//! the JSON answer, and renders it.
//!
//! The pipeline is strictly linear:
//!
//! 1. [`symbol`] normalizes the ticker (default `.NS` suffix)
//! 2. [`agent`] sends the scrape query and decodes the reply
//! 3. [`render`] projects the record into a fixed eight-column table
//! 4. [`writer`] persists the same record as a markdown file
//!
//! # Example
//!
//! ```rust,ignore
//! use scrip_llm::providers::GroqProvider;
//! use scrip_report::{ScrapeAgent, ScrapeConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = Arc::new(GroqProvider::from_env()?);
//!     let agent = ScrapeAgent::new(provider, ScrapeConfig::default());
//!
//!     let report = agent.scrape("TCS").await?;
//!     println!("{}", scrip_report::render::render_table(&report));
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod model;
pub mod prompts;
pub mod render;
pub mod symbol;
pub mod writer;

// Re-export main types for convenience
pub use agent::ScrapeAgent;
pub use config::ScrapeConfig;
pub use error::{ReportError, Result};
pub use model::{Figure, NewsItem, StockReport};
