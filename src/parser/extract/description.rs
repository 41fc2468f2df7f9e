use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom;

static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.description-content").unwrap());

pub fn description(document: &Html) -> Option<String> {
    dom::first(document, &DESCRIPTION).and_then(dom::multiline_text)
}
