use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom;

static CANONICAL_URL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:url"]"#).unwrap());
static BREADCRUMB_NAV: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"nav[aria-label="breadcrumbs"]"#).unwrap());
static BREADCRUMB_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Up to three taxonomy levels. A level is only set when every level above it
/// is set.
#[derive(Debug, Default, PartialEq)]
pub struct Taxonomy {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub subcategory2: Option<String>,
}

impl Taxonomy {
    fn from_labels(labels: impl IntoIterator<Item = String>) -> Self {
        let mut it = labels.into_iter();
        let category = it.next();
        let subcategory = category.as_ref().and_then(|_| it.next());
        let subcategory2 = subcategory.as_ref().and_then(|_| it.next());
        Taxonomy {
            category,
            subcategory,
            subcategory2,
        }
    }
}

/// Canonical address declared by the page itself.
pub fn canonical_url(document: &Html) -> Option<String> {
    dom::first(document, &CANONICAL_URL).and_then(|el| dom::attr(el, "content"))
}

/// Breadcrumb labels minus the leading root link.
pub fn taxonomy(document: &Html) -> Taxonomy {
    let Some(nav) = dom::first(document, &BREADCRUMB_NAV) else {
        return Taxonomy::default();
    };

    // The first link is the generic root ("Home"); blank labels never count.
    let labels = nav
        .select(&BREADCRUMB_LINK)
        .skip(1)
        .filter_map(dom::inline_text);

    Taxonomy::from_labels(labels)
}
