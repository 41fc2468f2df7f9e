use std::sync::LazyLock;

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

use crate::model::Package;
use crate::parser::dom;

static PACKAGE_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.package-content").unwrap());
static TAB_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.nav-container label").unwrap());

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3 b").unwrap());
static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"span[data-track-tag="text"]"#).unwrap());
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("header p").unwrap());
static DELIVERY: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".delivery").unwrap());
static REVISIONS: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".revisions").unwrap());
static FEATURE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("ul.features li").unwrap());

/// Package blocks keyed by the tab label at the same position, in document
/// order. Blocks past the last label get `package_<index>`.
pub fn packages(document: &Html) -> IndexMap<String, Package> {
    let labels: Vec<Option<String>> = document.select(&TAB_LABEL).map(dom::inline_text).collect();

    document
        .select(&PACKAGE_BLOCK)
        .enumerate()
        .map(|(idx, block)| {
            let name = labels
                .get(idx)
                .cloned()
                .flatten()
                .unwrap_or_else(|| format!("package_{idx}"));
            (name, package(block))
        })
        .collect()
}

fn package(block: ElementRef<'_>) -> Package {
    Package {
        title: field(block, &TITLE),
        price: field(block, &PRICE),
        description: field(block, &DESCRIPTION),
        delivery_time: field(block, &DELIVERY),
        revisions: field(block, &REVISIONS),
        features: block.select(&FEATURE).filter_map(dom::inline_text).collect(),
    }
}

fn field(block: ElementRef<'_>, selector: &Selector) -> Option<String> {
    dom::first_in(block, selector).and_then(dom::inline_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(title: &str) -> String {
        format!(
            r#"<div class="package-content">
                <header><h3><b>{title}</b></h3><span data-track-tag="text">US$50</span><p>Short pitch</p></header>
                <div class="delivery">3 Days Delivery</div>
                <div class="revisions">2 Revisions</div>
                <ul class="features"><li>Logo transparency</li><li> </li><li>Vector file</li></ul>
            </div>"#
        )
    }

    #[test]
    fn three_blocks_two_labels() {
        let html = format!(
            r#"<div class="nav-container"><label>Basic</label><label>Standard</label></div>{}{}{}"#,
            block("One"),
            block("Two"),
            block("Three")
        );
        let p = packages(&Html::parse_document(&html));
        let keys: Vec<&str> = p.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Basic", "Standard", "package_2"]);
        assert_eq!(p["package_2"].title.as_deref(), Some("Three"));
    }

    #[test]
    fn package_fields() {
        let html = format!(r#"<div class="nav-container"><label>Basic</label></div>{}"#, block("Starter"));
        let p = packages(&Html::parse_document(&html));
        let basic = &p["Basic"];
        assert_eq!(basic.title.as_deref(), Some("Starter"));
        assert_eq!(basic.price.as_deref(), Some("US$50"));
        assert_eq!(basic.description.as_deref(), Some("Short pitch"));
        assert_eq!(basic.delivery_time.as_deref(), Some("3 Days Delivery"));
        assert_eq!(basic.revisions.as_deref(), Some("2 Revisions"));
        assert_eq!(basic.features, vec!["Logo transparency", "Vector file"]);
    }

    #[test]
    fn bare_block_has_absent_fields_and_empty_features() {
        let p = packages(&Html::parse_document(r#"<div class="package-content"></div>"#));
        assert_eq!(p.len(), 1);
        assert_eq!(p["package_0"], Package::default());
        assert!(p["package_0"].features.is_empty());
    }

    #[test]
    fn blank_label_uses_placeholder() {
        let html = format!(r#"<div class="nav-container"><label> </label></div>{}"#, block("X"));
        let p = packages(&Html::parse_document(&html));
        assert!(p.contains_key("package_0"));
    }

    #[test]
    fn no_blocks() {
        let p = packages(&Html::parse_document("<div class=\"nav-container\"><label>Basic</label></div>"));
        assert!(p.is_empty());
    }
}
