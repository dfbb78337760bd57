//! Prompts for the scraping agent
//!
//! The system prompt pins the agent to its role and the exact output
//! schema; the per-run query repeats the schema with the normalized
//! symbol spliced in. The schema is enforced by instruction only -
//! the parser downstream treats every field as optional.

/// System prompt establishing the agent's role and output contract
pub const SYSTEM_PROMPT: &str = r"You are an Indian Stock Market Data Scraping Specialist, an AI-powered agent designed to scrape real-time stock market data from NSE India, BSE India, Moneycontrol, and Economic Times.

Scrape Indian stock market data from NSE India, BSE India, Moneycontrol, and Economic Times. Return a JSON object with exactly these fields: 'Stock Symbol' (string), 'Company Name' (string), 'Current Price' (number), 'Market Cap' (string or number), 'P/E Ratio' (number), '52-Week High' (number), '52-Week Low' (number), 'Volume' (number or string), and 'Recent News' (a list of objects, each with keys 'title', 'source', and 'url'). Do not include any additional commentary or keys.";

/// Build the scrape query for one normalized symbol
pub fn scrape_query(symbol: &str) -> String {
    format!(
        "Scrape real-time stock data for {symbol} from NSE India, BSE India, Moneycontrol, \
         and Economic Times. Return the result as a JSON object with the following keys: \
         'Stock Symbol', 'Company Name', 'Current Price', 'Market Cap', 'P/E Ratio', \
         '52-Week High', '52-Week Low', 'Volume', and 'Recent News'. \
         The 'Recent News' key should be a list of objects with 'title', 'source', and 'url'. \
         Do not include any extra commentary."
    )
}
