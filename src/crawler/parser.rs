use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::crawler::models::ListingSnapshot;

/// Extracts listing id -> timestamp pairs from the classifieds page.
///
/// Anchors pointing at an item page carry the id in their `no=` query
/// parameter. The timestamp is searched for in the text of the anchor's
/// containing element, since the page renders it as a sibling of the link
/// rather than inside it. Scanning stops once `limit` distinct ids have
/// been collected.
pub fn parse_listing_snapshot(html: &str, limit: usize) -> ListingSnapshot {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href*=\"classified/item.html?no=\"]").unwrap();
    let id_re = Regex::new(r"no=(\d+)").unwrap();
    let dt_re = Regex::new(r"\b(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2})\b").unwrap();

    let mut snapshot = ListingSnapshot::new();

    for anchor in document.select(&selector) {
        let href = anchor.value().attr("href").unwrap_or_default();
        let id = match id_re.captures(href) {
            Some(caps) => caps[1].to_string(),
            None => continue,
        };

        let context = match anchor.parent().and_then(ElementRef::wrap) {
            Some(parent) => element_text(parent),
            None => element_text(anchor),
        };

        let timestamp = dt_re
            .captures(&context)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();

        snapshot.upsert(id, timestamp);

        if snapshot.len() >= limit {
            break;
        }
    }

    snapshot
}

fn element_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, rest: &str) -> String {
        format!(
            "<tr><td><a href=\"classified/item.html?no={id}\">Listing {id}</a> {rest}</td></tr>"
        )
    }

    #[test]
    fn extracts_ids_and_timestamps_from_row_context() {
        let html = format!(
            "<table>{}{}</table>",
            row("101", "Montreal 2024-01-05 09:30"),
            row("102", "no date shown"),
        );

        let snap = parse_listing_snapshot(&html, 80);

        assert_eq!(snap.len(), 2);
        assert_eq!(snap.get("101"), Some("2024-01-05 09:30"));
        assert_eq!(snap.get("102"), Some(""));
    }

    #[test]
    fn ignores_anchors_without_numeric_id() {
        let html = "<p><a href=\"classified/item.html?no=\">broken</a>\
                    <a href=\"classified/item.html?no=7\">ok 2024-02-01 08:00</a></p>";

        let snap = parse_listing_snapshot(html, 80);

        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get("7"), Some("2024-02-01 08:00"));
    }

    #[test]
    fn duplicate_id_keeps_first_timestamp() {
        let html = format!(
            "<table>{}{}</table>",
            row("55", "2024-03-01 10:00"),
            row("55", "2024-03-02 11:00"),
        );

        let snap = parse_listing_snapshot(&html, 80);

        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get("55"), Some("2024-03-01 10:00"));
    }

    #[test]
    fn duplicate_id_fills_in_missing_timestamp() {
        let html = format!(
            "<table>{}{}</table>",
            row("55", "no date here"),
            row("55", "2024-03-02 11:00"),
        );

        let snap = parse_listing_snapshot(&html, 80);

        assert_eq!(snap.get("55"), Some("2024-03-02 11:00"));
    }

    #[test]
    fn stops_at_limit_in_document_order() {
        let html: String = (1..=7).map(|i| row(&i.to_string(), "")).collect();

        let snap = parse_listing_snapshot(&html, 3);

        assert_eq!(snap.len(), 3);
        let ids: Vec<&str> = snap.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn timestamp_is_first_lexical_match() {
        let html = row("9", "2024-13-99 25:61 is bogus but 2024-06-15 18:45 is real");

        let snap = parse_listing_snapshot(&html, 80);

        // the regex is lexical, not calendar-aware; it still anchors on the
        // first token shaped like a datetime
        assert_eq!(snap.get("9"), Some("2024-13-99 25:61"));
    }
}
