use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::parser::dom;

static TEXT_BLOCK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Recognised seller levels, in match priority order.
pub const SELLER_LEVELS: &[&str] = &["Top Rated", "Level 2", "Level 1"];

/// Text of the first short block mentioning a recognised level.
pub fn seller_level(document: &Html) -> Option<String> {
    dom::text_blocks(document, &TEXT_BLOCK)
        .map(|s| s.trim().to_string())
        .find(|text| SELLER_LEVELS.iter().any(|level| text.contains(level)))
}

pub fn orders_in_queue(document: &Html) -> Option<u32> {
    let text = dom::text_blocks(document, &TEXT_BLOCK).find(|s| s.contains("orders in queue"))?;
    DIGITS_RE.find(&text)?.as_str().parse().ok()
}

/// Raw "/hour" text, not parsed.
pub fn hourly_rate(document: &Html) -> Option<String> {
    dom::text_blocks(document, &TEXT_BLOCK)
        .find(|s| s.contains("/hour"))
        .map(|s| s.trim().to_string())
}
