//! The scraping agent: one request out, one JSON payload back
//!
//! `ScrapeAgent` owns the provider handle and the run configuration.
//! It sends exactly one completion request per scrape and never
//! retries; failures surface as [`ReportError`] variants for the
//! caller to absorb.

use crate::config::ScrapeConfig;
use crate::error::{ReportError, Result};
use crate::model::StockReport;
use crate::prompts;
use crate::symbol;
use scrip_llm::{CompletionRequest, LLMProvider, Message};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Agent that asks the hosted model for one stock's data
pub struct ScrapeAgent {
    provider: Arc<dyn LLMProvider>,
    config: ScrapeConfig,
}

impl ScrapeAgent {
    /// Create a new scraping agent backed by the given provider
    pub fn new(provider: Arc<dyn LLMProvider>, config: ScrapeConfig) -> Self {
        Self { provider, config }
    }

    /// Scrape stock market data for a given symbol
    ///
    /// The symbol is normalized (default `.NS` suffix) before it is
    /// embedded in the query.
    #[instrument(skip(self))]
    pub async fn scrape(&self, stock_symbol: &str) -> Result<StockReport> {
        let query_symbol = symbol::normalize(stock_symbol);
        debug!(provider = self.provider.name(), "requesting stock data for {query_symbol}");

        let request = CompletionRequest::builder(self.config.model.as_str())
            .system(prompts::SYSTEM_PROMPT)
            .add_message(Message::user(prompts::scrape_query(&query_symbol)))
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature)
            .build();

        let response = self.provider.complete(request).await?;
        parse_reply(&response.message)
    }
}

/// Decode the agent's textual payload into a report record
fn parse_reply(message: &Message) -> Result<StockReport> {
    let Some(text) = message.text() else {
        return Err(ReportError::UnexpectedResponse(
            "assistant message has no text content".to_string(),
        ));
    };

    let payload = strip_code_fence(text);
    let value: Value = serde_json::from_str(payload).map_err(|source| ReportError::Decode {
        source,
        content: payload.to_string(),
    })?;

    Ok(StockReport::from_value(&value))
}

/// Remove a surrounding markdown code fence, if any
///
/// The agent runs in markdown mode and sometimes wraps its JSON reply
/// in a fenced `json` code block.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}
