pub mod dom;
pub mod extract;

use chrono::Local;
use scraper::Html;

use crate::model::GigSnapshot;

/// Parse a gig page and capture its snapshot, stamped with the local clock.
pub fn snapshot_from_html(html: &str) -> GigSnapshot {
    let document = Html::parse_document(html);
    extract::extract_all(&document, Local::now().naive_local())
}
