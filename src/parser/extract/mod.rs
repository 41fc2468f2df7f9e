pub mod description;
pub mod faqs;
pub mod meta;
pub mod packages;
pub mod rating;
pub mod seller;

use chrono::NaiveDateTime;
use scraper::Html;
use tracing::debug;

use crate::model::GigSnapshot;

/// Seller level recorded when no recognised level marker is present.
pub const DEFAULT_SELLER_LEVEL: &str = "New Seller";
pub const SNAPSHOT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Run every field extractor against one document and assemble the snapshot.
/// Extractors are independent: a missing anchor only blanks its own field.
pub fn extract_all(document: &Html, captured_at: NaiveDateTime) -> GigSnapshot {
    let taxonomy = meta::taxonomy(document);
    let snapshot = GigSnapshot {
        url: meta::canonical_url(document),
        category: taxonomy.category,
        subcategory: taxonomy.subcategory,
        subcategory2: taxonomy.subcategory2,
        seller_level: seller::seller_level(document)
            .unwrap_or_else(|| DEFAULT_SELLER_LEVEL.to_string()),
        orders_in_queue: seller::orders_in_queue(document),
        rating: rating::rating(document),
        review_count: rating::review_count(document),
        description: description::description(document),
        favorite_count: rating::favorite_count(document),
        packages: packages::packages(document),
        faqs: faqs::faqs(document),
        hourly_rate: seller::hourly_rate(document),
        snapshot_time: captured_at.format(SNAPSHOT_TIME_FORMAT).to_string(),
    };

    debug!(
        "Extracted {} packages, {} faqs (rating {:?}, reviews {:?})",
        snapshot.packages.len(),
        snapshot.faqs.len(),
        snapshot.rating,
        snapshot.review_count
    );
    snapshot
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn captured_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    fn fixture(name: &str) -> Html {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap();
        Html::parse_document(&html)
    }

    /// The fixture with everything from `start` through the next `end` cut out.
    fn fixture_without(name: &str, start: &str, end: &str) -> Html {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap();
        let from = html.find(start).unwrap();
        let to = from + html[from..].find(end).unwrap() + end.len();
        Html::parse_document(&format!("{}{}", &html[..from], &html[to..]))
    }

    #[test]
    fn full_gig_page() {
        let s = extract_all(&fixture("gig"), captured_at());
        assert_eq!(s.url.as_deref(), Some("https://www.fiverr.com/jane_doe/design-a-minimalist-logo"));
        assert_eq!(s.category.as_deref(), Some("Graphics & Design"));
        assert_eq!(s.subcategory.as_deref(), Some("Logo & Brand Identity"));
        assert_eq!(s.subcategory2.as_deref(), Some("Logo Design"));
        assert_eq!(s.seller_level, "Level 2 Seller");
        assert_eq!(s.orders_in_queue, Some(7));
        assert_eq!(s.rating, Some(4.9));
        assert_eq!(s.review_count, Some(1234));
        assert_eq!(s.favorite_count, Some(2310));
        assert_eq!(s.hourly_rate.as_deref(), Some("US$60/hour"));
        assert_eq!(s.snapshot_time, "2026-10-16 09:05:07");

        let description = s.description.unwrap();
        assert!(description.starts_with("Hi! I'm Jane, a brand designer"));
        assert!(!description.contains("\n\n"));
        assert!(description.lines().all(|l| l == l.trim()));

        let keys: Vec<&str> = s.packages.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Basic", "Standard", "package_2"]);
        let standard = &s.packages["Standard"];
        assert_eq!(standard.price.as_deref(), Some("US$120"));
        assert_eq!(standard.delivery_time.as_deref(), Some("4 Days Delivery"));
        assert_eq!(standard.features.len(), 3);

        assert_eq!(s.faqs.len(), 2);
        assert_eq!(s.faqs[1].answer, "Yes.\nYou get the vector source files.");
    }

    #[test]
    fn empty_document_defaults() {
        let s = extract_all(&Html::parse_document(""), captured_at());
        assert_eq!(s.seller_level, DEFAULT_SELLER_LEVEL);
        assert_eq!(s.url, None);
        assert_eq!(s.category, None);
        assert_eq!(s.rating, None);
        assert_eq!(s.review_count, None);
        assert!(s.packages.is_empty());
        assert!(s.faqs.is_empty());
        assert_eq!(s.hourly_rate, None);
    }

    #[test]
    fn missing_rating_region_only_blanks_rating() {
        let full = extract_all(&fixture("gig"), captured_at());
        let s = extract_all(
            &fixture_without("gig", r#"<div data-track-tag="rating""#, "</div>"),
            captured_at(),
        );
        assert_eq!(s.rating, None);
        assert_eq!(s.review_count, None);
        assert_eq!(s.packages, full.packages);
        assert_eq!(s.faqs, full.faqs);
        assert_eq!(s.description, full.description);
        assert_eq!(s.category, full.category);
        assert_eq!(s.seller_level, full.seller_level);
    }

    #[test]
    fn missing_breadcrumbs_only_blanks_taxonomy() {
        let full = extract_all(&fixture("gig"), captured_at());
        let s = extract_all(
            &fixture_without("gig", r#"<nav aria-label="breadcrumbs">"#, "</nav>"),
            captured_at(),
        );
        assert_eq!(s.category, None);
        assert_eq!(s.subcategory, None);
        assert_eq!(s.subcategory2, None);
        assert_eq!(
            GigSnapshot {
                category: full.category.clone(),
                subcategory: full.subcategory.clone(),
                subcategory2: full.subcategory2.clone(),
                ..s
            },
            full
        );
    }

    #[test]
    fn missing_level_falls_back_to_default() {
        let s = extract_all(
            &fixture_without("gig", r#"<p class="seller-level">"#, "</p>"),
            captured_at(),
        );
        assert_eq!(s.seller_level, DEFAULT_SELLER_LEVEL);
        assert_eq!(s.orders_in_queue, Some(7));
    }
}
