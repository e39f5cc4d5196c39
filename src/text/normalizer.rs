use regex::Regex;

/// Deterministic comment cleaner.
///
/// Cleaning runs in a fixed order: URLs first (a URL is one non-whitespace
/// token, so stripping it after the symbol filter would leave alphanumeric
/// fragments of the path behind), then everything outside
/// `[A-Za-z0-9\s]`, then lowercasing, then whitespace collapse.
pub struct TextNormalizer {
    url_pattern: Regex,
    symbol_pattern: Regex,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            url_pattern: Regex::new(r"http\S+").expect("valid URL pattern"),
            symbol_pattern: Regex::new(r"[^A-Za-z0-9\s]+").expect("valid symbol pattern"),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let without_urls = self.url_pattern.replace_all(text, "");
        let without_symbols = self.symbol_pattern.replace_all(&without_urls, "");
        let lowered = without_symbols.to_lowercase();

        lowered.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
