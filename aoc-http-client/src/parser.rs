//! HTML response parsing utilities

use crate::error::AocError;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Parser for AOC HTML responses with cached regex patterns and selectors
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    user_id_regex: OnceLock<Regex>,
    description_selector: OnceLock<Selector>,
    main_selector: OnceLock<Selector>,
}

impl ResponseParser {
    /// Create a new parser with uninitialized caches
    pub fn new() -> Self {
        Self {
            user_id_regex: OnceLock::new(),
            description_selector: OnceLock::new(),
            main_selector: OnceLock::new(),
        }
    }

    /// Get or compile the user ID regex
    fn user_id_regex(&self) -> &Regex {
        self.user_id_regex
            .get_or_init(|| Regex::new(r"\(anonymous user #(\d+)\)").unwrap())
    }

    /// One `article.day-desc` per unlocked part
    fn description_selector(&self) -> &Selector {
        self.description_selector
            .get_or_init(|| Selector::parse("article.day-desc").unwrap())
    }

    fn main_selector(&self) -> &Selector {
        self.main_selector
            .get_or_init(|| Selector::parse("main").unwrap())
    }

    /// Extract user ID from settings page HTML
    pub fn extract_user_id(&self, html: &str) -> Option<u64> {
        let regex = self.user_id_regex();
        let captures = regex.captures(html)?;
        let user_id_str = captures.get(1)?.as_str();
        user_id_str.parse::<u64>().ok()
    }

    /// Extract the puzzle description from a day page
    ///
    /// The text of every `article.day-desc` is joined by a blank line. Pages
    /// without those articles fall back to the `<main>` element.
    pub fn extract_description(&self, html: &str) -> Result<String, AocError> {
        let document = Html::parse_document(html);

        let parts: Vec<String> = document
            .select(self.description_selector())
            .map(|article| article.text().collect::<String>().trim().to_string())
            .collect();

        if parts.is_empty() {
            return main_text(&document, self.main_selector());
        }
        Ok(parts.join("\n\n"))
    }
}

/// Text content of the first `<main>` element
fn main_text(document: &Html, selector: &Selector) -> Result<String, AocError> {
    let main_element = document
        .select(selector)
        .next()
        .ok_or(AocError::HtmlParse("main"))?;

    Ok(main_element.text().collect::<String>())
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
