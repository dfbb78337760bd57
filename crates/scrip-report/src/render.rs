//! Console rendering for stock reports

use crate::model::{Figure, StockReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::fmt::Write;

/// Placeholder shown for any field the agent did not supply
pub const PLACEHOLDER: &str = "N/A";

/// Placeholder link for news entries without a URL
pub const PLACEHOLDER_URL: &str = "#";

/// Currency glyph prefixed to price-like fields
pub const RUPEE: &str = "₹";

/// Maximum number of news entries shown
pub const MAX_NEWS_ITEMS: usize = 5;

/// Display a figure, or the placeholder when absent
pub(crate) fn figure_or_na(figure: Option<&Figure>) -> String {
    figure.map_or_else(|| PLACEHOLDER.to_string(), Figure::to_string)
}

/// Display a rupee-prefixed figure, placeholder included
///
/// The prefix is applied unconditionally, matching the report format
/// ("₹N/A" for an absent price).
pub(crate) fn rupee_figure(figure: Option<&Figure>) -> String {
    format!("{RUPEE}{}", figure_or_na(figure))
}

/// Display an optional string field, or the placeholder when absent
pub(crate) fn text_or_na(text: Option<&str>) -> String {
    text.unwrap_or(PLACEHOLDER).to_string()
}

/// Render the fixed eight-column stock data table
pub fn render_table(report: &StockReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Stock Symbol",
            "Company Name",
            "Current Price (INR)",
            "Market Cap",
            "P/E Ratio",
            "52-Week High",
            "52-Week Low",
            "Volume",
        ]);

    table.add_row(vec![
        text_or_na(report.symbol.as_deref()),
        text_or_na(report.company_name.as_deref()),
        rupee_figure(report.price.as_ref()),
        figure_or_na(report.market_cap.as_ref()),
        figure_or_na(report.pe_ratio.as_ref()),
        rupee_figure(report.week_high_52.as_ref()),
        rupee_figure(report.week_low_52.as_ref()),
        figure_or_na(report.volume.as_ref()),
    ]);

    table.to_string()
}

/// Render up to the first five news entries as a numbered listing
///
/// Returns `None` when the record carries no news at all, so the
/// caller can skip the section header.
pub fn render_news(report: &StockReport) -> Option<String> {
    if report.news.is_empty() {
        return None;
    }

    let mut output = String::new();
    for (i, news) in report.news.iter().take(MAX_NEWS_ITEMS).enumerate() {
        let _ = writeln!(
            output,
            "{}. {} - {}",
            i + 1,
            text_or_na(news.title.as_deref()),
            text_or_na(news.source.as_deref()),
        );
        let _ = writeln!(
            output,
            "   {}\n",
            news.url.as_deref().unwrap_or(PLACEHOLDER_URL)
        );
    }

    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewsItem;

    fn full_report() -> StockReport {
        StockReport {
            symbol: Some("TCS.NS".to_string()),
            company_name: Some("Tata Consultancy Services".to_string()),
            price: Some(Figure::Number(4012.55)),
            market_cap: Some(Figure::Text("₹14.5 Lakh Cr".to_string())),
            pe_ratio: Some(Figure::Number(29.8)),
            week_high_52: Some(Figure::Number(4592.25)),
            week_low_52: Some(Figure::Number(3311.0)),
            volume: Some(Figure::Number(2_145_032.0)),
            news: vec![],
        }
    }

    fn news_item(n: usize) -> NewsItem {
        NewsItem {
            title: Some(format!("Headline {n}")),
            source: Some("Moneycontrol".to_string()),
            url: Some(format!("https://example.com/{n}")),
        }
    }

    #[test]
    fn test_table_contains_all_eight_fields() {
        let rendered = render_table(&full_report());

        for header in [
            "Stock Symbol",
            "Company Name",
            "Current Price (INR)",
            "Market Cap",
            "P/E Ratio",
            "52-Week High",
            "52-Week Low",
            "Volume",
        ] {
            assert!(rendered.contains(header), "missing header {header}");
        }

        assert!(rendered.contains("TCS.NS"));
        assert!(rendered.contains("Tata Consultancy Services"));
        assert!(rendered.contains("29.8"));
    }

    #[test]
    fn test_price_like_fields_carry_rupee_glyph() {
        let rendered = render_table(&full_report());

        assert!(rendered.contains("₹4012.55"));
        assert!(rendered.contains("₹4592.25"));
        assert!(rendered.contains("₹3311"));
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let rendered = render_table(&StockReport::default());

        assert!(rendered.contains(PLACEHOLDER));
        // Price-like fields keep the glyph on the placeholder
        assert!(rendered.contains("₹N/A"));
    }

    #[test]
    fn test_no_news_renders_nothing() {
        assert!(render_news(&full_report()).is_none());
    }

    #[test]
    fn test_news_listing_numbered_with_urls() {
        let mut report = full_report();
        report.news = vec![news_item(1), news_item(2)];

        let listing = render_news(&report).unwrap();
        assert!(listing.contains("1. Headline 1 - Moneycontrol"));
        assert!(listing.contains("2. Headline 2 - Moneycontrol"));
        assert!(listing.contains("https://example.com/1"));
    }

    #[test]
    fn test_news_listing_truncates_to_five() {
        let mut report = full_report();
        report.news = (1..=8).map(news_item).collect();

        let listing = render_news(&report).unwrap();
        assert!(listing.contains("5. Headline 5"));
        assert!(!listing.contains("6. Headline 6"));
    }

    #[test]
    fn test_news_subfield_placeholders() {
        let mut report = full_report();
        report.news = vec![NewsItem::default()];

        let listing = render_news(&report).unwrap();
        assert!(listing.contains("1. N/A - N/A"));
        assert!(listing.contains("   #"));
    }
}
