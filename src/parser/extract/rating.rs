use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::parser::dom;

static RATING_VALUE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"div[data-track-tag="rating"] strong"#).unwrap());
static RATING_TEXT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[data-track-tag="rating"] span[data-track-tag="text"]"#).unwrap()
});
static COLLECT_COUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.collect-count").unwrap());
static COUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d,]+").unwrap());

pub fn rating(document: &Html) -> Option<f64> {
    let text = dom::first(document, &RATING_VALUE).and_then(dom::inline_text)?;
    text.parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Count from the first rating-region text mentioning "review". Later
/// mentions are never consulted, even when the first has no number.
pub fn review_count(document: &Html) -> Option<u64> {
    let text = document
        .select(&RATING_TEXT)
        .map(dom::inline_text_or_empty)
        .find(|t| t.to_lowercase().contains("review"))?;
    parse_count(COUNT_RE.find(&text)?.as_str())
}

pub fn favorite_count(document: &Html) -> Option<u64> {
    let text = dom::first(document, &COLLECT_COUNT).and_then(dom::inline_text)?;
    parse_count(&text)
}

fn parse_count(raw: &str) -> Option<u64> {
    raw.replace(',', "").parse().ok()
}
