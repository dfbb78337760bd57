//! Ticker symbol handling

/// NSE (National Stock Exchange) suffix, the default exchange
pub const NSE_SUFFIX: &str = ".NS";

/// BSE (Bombay Stock Exchange) suffix
pub const BSE_SUFFIX: &str = ".BO";

/// Append the default exchange suffix if the ticker carries none
///
/// Symbols already ending in `.NS` or `.BO` pass through unchanged.
pub fn normalize(symbol: &str) -> String {
    if symbol.ends_with(NSE_SUFFIX) || symbol.ends_with(BSE_SUFFIX) {
        symbol.to_string()
    } else {
        format!("{symbol}{NSE_SUFFIX}")
    }
}

/// Trim and uppercase one line of user input
///
/// Returns `None` when nothing is left after trimming, in which case
/// the run stops before any request is made.
pub fn sanitize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_symbol_gets_nse_suffix() {
        assert_eq!(normalize("TCS"), "TCS.NS");
        assert_eq!(normalize("RELIANCE"), "RELIANCE.NS");
    }

    #[test]
    fn test_suffixed_symbols_unchanged() {
        assert_eq!(normalize("TCS.NS"), "TCS.NS");
        assert_eq!(normalize("TCS.BO"), "TCS.BO");
    }

    #[test]
    fn test_sanitize_trims_and_uppercases() {
        assert_eq!(sanitize_input("  infy \n"), Some("INFY".to_string()));
        assert_eq!(sanitize_input("tcs.ns"), Some("TCS.NS".to_string()));
    }

    #[test]
    fn test_sanitize_rejects_empty_input() {
        assert_eq!(sanitize_input(""), None);
        assert_eq!(sanitize_input("   \t\n"), None);
    }
}
