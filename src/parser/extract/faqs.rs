use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::model::Faq;
use crate::parser::dom;

static ARTICLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article.faq-collapsible").unwrap());
static QUESTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".faq-collapsible-title p").unwrap());
static ANSWER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".faq-collapsible-content p").unwrap());

/// FAQ entries that have both a question and an answer anchor. Anything else
/// is dropped, never kept half-filled.
pub fn faqs(document: &Html) -> Vec<Faq> {
    document
        .select(&ARTICLE)
        .filter_map(|article| {
            let question = dom::first_in(article, &QUESTION)?;
            let answer = dom::first_in(article, &ANSWER)?;
            Some(Faq {
                question: dom::inline_text_or_empty(question),
                answer: dom::multiline_text(answer).unwrap_or_default(),
            })
        })
        .collect()
}
