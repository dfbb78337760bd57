//! The stock report record decoded from the agent's JSON reply

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A scalar the source reports as either a number or a string
///
/// `Market Cap` and `Volume` arrive in whichever shape the upstream
/// site used ("₹12.5 Lakh Cr" vs `1250000000000`). The ambiguity is
/// preserved rather than coerced; display formatting is the same for
/// both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Figure {
    /// Numeric representation
    Number(f64),
    /// Textual representation
    Text(String),
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Number(n) => write!(f, "{n}"),
            Figure::Text(s) => f.write_str(s),
        }
    }
}

/// One news entry attached to a stock report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline
    pub title: Option<String>,
    /// Publishing site
    pub source: Option<String>,
    /// Link to the article
    pub url: Option<String>,
}

/// The decoded stock report record
///
/// Every field is optional. The producing agent is held to the target
/// schema only by a natural-language instruction, so consumers must
/// substitute a placeholder for anything missing or mistyped rather
/// than fail.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StockReport {
    /// Ticker symbol as reported by the agent
    pub symbol: Option<String>,
    /// Full company name
    pub company_name: Option<String>,
    /// Last traded price, in INR
    pub price: Option<Figure>,
    /// Market capitalization, units as reported by the source
    pub market_cap: Option<Figure>,
    /// Price-to-earnings ratio
    pub pe_ratio: Option<Figure>,
    /// 52-week high, in INR
    pub week_high_52: Option<Figure>,
    /// 52-week low, in INR
    pub week_low_52: Option<Figure>,
    /// Trading volume
    pub volume: Option<Figure>,
    /// Recent news entries, most relevant first
    pub news: Vec<NewsItem>,
}

impl StockReport {
    /// Project a decoded JSON value into a report
    ///
    /// No schema validation beyond "is this valid JSON" happens before
    /// this point, and none happens here either: a missing or mistyped
    /// field becomes `None` (or an empty news list) instead of an error.
    pub fn from_value(value: &Value) -> Self {
        Self {
            symbol: text_field(value, "Stock Symbol"),
            company_name: text_field(value, "Company Name"),
            price: figure_field(value, "Current Price"),
            market_cap: figure_field(value, "Market Cap"),
            pe_ratio: figure_field(value, "P/E Ratio"),
            week_high_52: figure_field(value, "52-Week High"),
            week_low_52: figure_field(value, "52-Week Low"),
            volume: figure_field(value, "Volume"),
            news: news_field(value, "Recent News"),
        }
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn figure_field(value: &Value, key: &str) -> Option<Figure> {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().map(Figure::Number),
        Some(Value::String(s)) => Some(Figure::Text(s.clone())),
        _ => None,
    }
}

fn news_field(value: &Value, key: &str) -> Vec<NewsItem> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| NewsItem {
                    title: text_field(item, "title"),
                    source: text_field(item, "source"),
                    url: text_field(item, "url"),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        json!({
            "Stock Symbol": "TCS.NS",
            "Company Name": "Tata Consultancy Services",
            "Current Price": 4012.55,
            "Market Cap": "₹14.5 Lakh Cr",
            "P/E Ratio": 29.8,
            "52-Week High": 4592.25,
            "52-Week Low": 3311.0,
            "Volume": 2145032,
            "Recent News": [
                {
                    "title": "TCS wins large deal",
                    "source": "Economic Times",
                    "url": "https://example.com/tcs-deal"
                }
            ]
        })
    }

    #[test]
    fn test_full_record_projection() {
        let report = StockReport::from_value(&full_record());

        assert_eq!(report.symbol.as_deref(), Some("TCS.NS"));
        assert_eq!(
            report.company_name.as_deref(),
            Some("Tata Consultancy Services")
        );
        assert_eq!(report.price, Some(Figure::Number(4012.55)));
        assert_eq!(
            report.market_cap,
            Some(Figure::Text("₹14.5 Lakh Cr".to_string()))
        );
        assert_eq!(report.volume, Some(Figure::Number(2_145_032.0)));
        assert_eq!(report.news.len(), 1);
        assert_eq!(report.news[0].title.as_deref(), Some("TCS wins large deal"));
    }

    #[test]
    fn test_missing_fields_become_none() {
        let report = StockReport::from_value(&json!({ "Stock Symbol": "INFY.NS" }));

        assert_eq!(report.symbol.as_deref(), Some("INFY.NS"));
        assert_eq!(report.company_name, None);
        assert_eq!(report.price, None);
        assert!(report.news.is_empty());
    }

    #[test]
    fn test_mistyped_fields_become_none() {
        // Symbol as a number, price as a list, news as a string
        let report = StockReport::from_value(&json!({
            "Stock Symbol": 42,
            "Current Price": [1, 2, 3],
            "Recent News": "no news today"
        }));

        assert_eq!(report.symbol, None);
        assert_eq!(report.price, None);
        assert!(report.news.is_empty());
    }

    #[test]
    fn test_news_subfields_tolerate_absence() {
        let report = StockReport::from_value(&json!({
            "Recent News": [ { "title": "Headline only" }, {} ]
        }));

        assert_eq!(report.news.len(), 2);
        assert_eq!(report.news[0].title.as_deref(), Some("Headline only"));
        assert_eq!(report.news[0].url, None);
        assert_eq!(report.news[1].title, None);
    }

    #[test]
    fn test_figure_display() {
        assert_eq!(Figure::Number(29.8).to_string(), "29.8");
        assert_eq!(Figure::Text("2.1M".to_string()).to_string(), "2.1M");
    }
}
