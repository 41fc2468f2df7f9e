use scraper::{ElementRef, Html, Selector};

/// First element matching `selector` anywhere in the document.
pub fn first<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

/// First element matching `selector` below `scope`.
pub fn first_in<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Element text with whitespace runs collapsed to single spaces and trimmed.
/// Empty text is `None`.
pub fn inline_text(el: ElementRef<'_>) -> Option<String> {
    let joined: String = el.text().collect();
    non_empty(collapse_whitespace(&joined))
}

/// Like [`inline_text`] but yields an empty string instead of `None`.
pub fn inline_text_or_empty(el: ElementRef<'_>) -> String {
    inline_text(el).unwrap_or_default()
}

/// Element text with one line per text node: each line trimmed, blank lines
/// dropped, joined by `\n`.
pub fn multiline_text(el: ElementRef<'_>) -> Option<String> {
    let lines: Vec<&str> = el
        .text()
        .flat_map(|t| t.lines())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    non_empty(lines.join("\n"))
}

/// Trimmed attribute value, `None` when missing or blank.
pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .and_then(|v| non_empty(v.trim().to_string()))
}

/// The element's own string: defined only when the element has exactly one
/// child and that child is a text node, or an element that itself has an own
/// string.
pub fn own_string(el: ElementRef<'_>) -> Option<String> {
    let mut children = el.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    if let Some(text) = only.value().as_text() {
        return Some((**text).to_owned());
    }
    ElementRef::wrap(only).and_then(own_string)
}

/// Own strings of the elements matching `selector`, in document order.
/// Elements with mixed content are skipped.
pub fn text_blocks<'a>(
    document: &'a Html,
    selector: &'a Selector,
) -> impl Iterator<Item = String> + 'a {
    document.select(selector).filter_map(own_string)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

// ── Tests ──
