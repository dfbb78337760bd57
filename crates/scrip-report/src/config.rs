//! Configuration for the scraping agent

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_MAX_TOKENS: usize = 2048;
const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Configuration for the scraping agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Model identifier passed to the provider
    pub model: String,

    /// Maximum tokens the agent may generate per reply
    pub max_tokens: usize,

    /// Sampling temperature; low values keep the JSON output stable
    pub temperature: f32,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl ScrapeConfig {
    /// Create a new configuration builder
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::default()
    }

    /// Load the configuration from environment variables
    ///
    /// Reads the model name from `GROQ_MODEL` when set; everything else
    /// keeps its default.
    pub fn from_env() -> Result<Self> {
        Self::builder().from_env_model().build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.is_empty() {
            return Err(ReportError::Config("model must not be empty".to_string()));
        }

        if self.max_tokens == 0 {
            return Err(ReportError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ReportError::Config(format!(
                "temperature {} out of range 0.0..=2.0",
                self.temperature
            )));
        }

        Ok(())
    }
}

/// Builder for ScrapeConfig
#[derive(Debug, Default)]
pub struct ScrapeConfigBuilder {
    model: Option<String>,
    max_tokens: Option<usize>,
    temperature: Option<f32>,
}

impl ScrapeConfigBuilder {
    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the maximum tokens per reply
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Load the model identifier from the `GROQ_MODEL` environment variable
    pub fn from_env_model(mut self) -> Self {
        if let Ok(model) = std::env::var("GROQ_MODEL") {
            self.model = Some(model);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ScrapeConfig> {
        let defaults = ScrapeConfig::default();

        let config = ScrapeConfig {
            model: self.model.unwrap_or(defaults.model),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
        };

        config.validate()?;
        Ok(config)
    }
}
