use crate::crawler::models::{ListingId, ListingSnapshot};

/// Partition of the current snapshot relative to the prior one, in page
/// order. Recomputed every run, never persisted.
#[derive(Debug, Default, PartialEq)]
pub struct ChangeSet {
    pub new: Vec<ListingId>,
    pub updated: Vec<ListingId>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.updated.is_empty()
    }
}

/// Classifies each current listing against the prior snapshot.
///
/// A listing is "new" when its id was never seen before, and "updated"
/// when it was seen and now carries a different non-empty timestamp. A
/// timestamp regressing from known to empty is not an update, and ids
/// that disappeared from the page are ignored.
pub fn detect_changes(prev: &ListingSnapshot, curr: &ListingSnapshot) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for (id, timestamp) in curr.iter() {
        match prev.get(id) {
            None => changes.new.push(id.to_string()),
            Some(known) if !timestamp.is_empty() && known != timestamp => {
                changes.updated.push(id.to_string());
            }
            Some(_) => {}
        }
    }

    changes
}
