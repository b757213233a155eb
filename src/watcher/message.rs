use super::diff::ChangeSet;
use crate::crawler::models::ListingId;

const WATCH_SUBJECT: &str = "e-Maple Montreal classifieds";
const MAX_LISTED_IDS: usize = 5;

/// Builds the single notification text: subject line, one summary line
/// joining the non-empty categories with " / ", and the page URL.
pub fn build_message(changes: &ChangeSet, open_url: &str) -> String {
    let mut parts = Vec::new();

    if !changes.new.is_empty() {
        parts.push(format!(
            "{} new (ID: {})",
            changes.new.len(),
            format_ids(&changes.new)
        ));
    }
    if !changes.updated.is_empty() {
        parts.push(format!(
            "{} updated (ID: {})",
            changes.updated.len(),
            format_ids(&changes.updated)
        ));
    }

    format!("{}\n{}\n{}", WATCH_SUBJECT, parts.join(" / "), open_url)
}

/// Lists at most five ids, then folds the rest into a count.
fn format_ids(ids: &[ListingId]) -> String {
    let shown = ids
        .iter()
        .take(MAX_LISTED_IDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if ids.len() > MAX_LISTED_IDS {
        format!("{} (+{} more)", shown, ids.len() - MAX_LISTED_IDS)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<ListingId> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn message_carries_subject_summary_and_url() {
        let changes = ChangeSet {
            new: ids(&["999"]),
            updated: Vec::new(),
        };

        let msg = build_message(&changes, "http://example.net/list");

        assert_eq!(
            msg,
            "e-Maple Montreal classifieds\n1 new (ID: 999)\nhttp://example.net/list"
        );
    }

    #[test]
    fn new_and_updated_parts_are_joined() {
        let changes = ChangeSet {
            new: ids(&["1", "2"]),
            updated: ids(&["3"]),
        };

        let msg = build_message(&changes, "http://example.net/list");

        assert!(msg.contains("2 new (ID: 1, 2) / 1 updated (ID: 3)"));
    }

    #[test]
    fn seven_ids_list_first_five_plus_remainder() {
        let changes = ChangeSet {
            new: ids(&["1", "2", "3", "4", "5", "6", "7"]),
            updated: Vec::new(),
        };

        let msg = build_message(&changes, "http://example.net/list");

        assert!(msg.contains("7 new (ID: 1, 2, 3, 4, 5 (+2 more))"));
    }

    #[test]
    fn exactly_five_ids_have_no_remainder_marker() {
        let changes = ChangeSet {
            new: ids(&["1", "2", "3", "4", "5"]),
            updated: Vec::new(),
        };

        let msg = build_message(&changes, "http://example.net/list");

        assert!(msg.contains("5 new (ID: 1, 2, 3, 4, 5)"));
        assert!(!msg.contains("more"));
    }
}
