use super::enums::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque item key.
///
/// New items get a UUID; keys read back from storage are kept verbatim so
/// older timestamp-keyed lists still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Never changes after creation
    pub id: ItemId,
    pub text: String,
    /// The list this item belongs to
    pub context: Context,
    pub completed: bool,
}

impl Item {
    pub fn new(text: String, context: Context) -> Self {
        Self {
            id: ItemId::generate(),
            text,
            context,
            completed: false,
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// All items keyed by id, in display order
pub type ItemCollection = IndexMap<ItemId, Item>;

/// Items belonging to `context`, in collection order
pub fn items_in_context(items: &ItemCollection, context: Context) -> Vec<&Item> {
    items.values().filter(|item| item.context == context).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new() {
        let item = Item::new("Buy milk".to_string(), Context::Work);
        assert_eq!(item.text, "Buy milk");
        assert_eq!(item.context, Context::Work);
        assert!(!item.completed);
    }

    #[test]
    fn test_item_ids_are_unique() {
        let a = Item::new("a".to_string(), Context::Work);
        let b = Item::new("b".to_string(), Context::Work);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_completed_twice_restores() {
        let mut item = Item::new("Pack bags".to_string(), Context::Travel);
        item.toggle_completed();
        assert!(item.completed);
        item.toggle_completed();
        assert!(!item.completed);
    }

    #[test]
    fn test_items_in_context_filters_and_keeps_order() {
        let mut items = ItemCollection::new();
        for (text, ctx) in [("one", Context::Work), ("lisbon", Context::Travel), ("two", Context::Work)] {
            let item = Item::new(text.to_string(), ctx);
            items.insert(item.id.clone(), item);
        }

        let work: Vec<&str> = items_in_context(&items, Context::Work)
            .iter()
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(work, vec!["one", "two"]);

        let travel = items_in_context(&items, Context::Travel);
        assert_eq!(travel.len(), 1);
        assert_eq!(travel[0].text, "lisbon");
    }

    #[test]
    fn test_legacy_timestamp_id() {
        let id = ItemId::from("1699999999999");
        assert_eq!(id.as_str(), "1699999999999");
        assert_eq!(id.to_string(), "1699999999999");
    }
}
