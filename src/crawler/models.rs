use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type ListingId = String;

/// Point-in-time view of the listing page: listing id -> posting/update
/// datetime string ("YYYY-MM-DD HH:MM"), empty when the page showed none.
/// Iteration order is page order; truncation and message text rely on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingSnapshot(IndexMap<ListingId, String>);

impl ListingSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, ts)| (id.as_str(), ts.as_str()))
    }

    /// First-wins merge for duplicate ids within one page: an already
    /// recorded timestamp is only replaced when it was empty and the new
    /// occurrence carries a non-empty one.
    pub fn upsert(&mut self, id: ListingId, timestamp: String) {
        match self.0.get_mut(&id) {
            None => {
                self.0.insert(id, timestamp);
            }
            Some(existing) if existing.is_empty() && !timestamp.is_empty() => {
                *existing = timestamp;
            }
            Some(_) => {}
        }
    }
}

impl FromIterator<(ListingId, String)> for ListingSnapshot {
    fn from_iter<T: IntoIterator<Item = (ListingId, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
