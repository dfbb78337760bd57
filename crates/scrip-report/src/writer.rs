//! Markdown report persistence
//!
//! The report file is named after the symbol exactly as the user typed
//! it (pre-normalization) and is overwritten unconditionally on each
//! run. A write failure becomes [`ReportError::Storage`]; the binary
//! logs it and exits normally anyway.

use crate::error::Result;
use crate::model::StockReport;
use crate::render::{MAX_NEWS_ITEMS, PLACEHOLDER_URL, figure_or_na, rupee_figure, text_or_na};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name for a symbol's report
pub fn report_filename(stock_symbol: &str) -> String {
    format!("{stock_symbol}_stock_report.md")
}

/// Render the fixed markdown report template
pub fn render_markdown(report: &StockReport, stock_symbol: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# 📈 Indian Stock Market Report for {stock_symbol}\n");
    let _ = writeln!(
        out,
        "**Company Name:** {}\n",
        text_or_na(report.company_name.as_deref())
    );
    let _ = writeln!(
        out,
        "**Current Price:** {}",
        rupee_figure(report.price.as_ref())
    );
    let _ = writeln!(
        out,
        "**Market Cap:** {}",
        figure_or_na(report.market_cap.as_ref())
    );
    let _ = writeln!(
        out,
        "**P/E Ratio:** {}",
        figure_or_na(report.pe_ratio.as_ref())
    );
    let _ = writeln!(
        out,
        "**52-Week High:** {}",
        rupee_figure(report.week_high_52.as_ref())
    );
    let _ = writeln!(
        out,
        "**52-Week Low:** {}",
        rupee_figure(report.week_low_52.as_ref())
    );
    let _ = writeln!(out, "**Volume:** {}\n", figure_or_na(report.volume.as_ref()));

    if !report.news.is_empty() {
        let _ = writeln!(out, "## 📰 Latest Financial News\n");
        for (i, news) in report.news.iter().take(MAX_NEWS_ITEMS).enumerate() {
            let _ = writeln!(
                out,
                "{}. **{}** - {}",
                i + 1,
                text_or_na(news.title.as_deref()),
                text_or_na(news.source.as_deref()),
            );
            let _ = writeln!(
                out,
                "   [Read more]({})\n",
                news.url.as_deref().unwrap_or(PLACEHOLDER_URL)
            );
        }
    }

    out
}

/// Write the markdown report into `dir`, overwriting any previous run
///
/// Returns the path of the written file.
pub fn write_report(report: &StockReport, stock_symbol: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_filename(stock_symbol));
    fs::write(&path, render_markdown(report, stock_symbol))?;
    info!("stock report saved as {}", path.display());
    Ok(path)
}
