use crate::domain::{Check, Context, Item, ItemCollection, ItemId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// On-disk shape of one item; the id is the map key
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredItem {
    text: String,
    working: bool,
    check: Check,
}

/// Serialize the whole collection as a JSON object keyed by id
pub fn serialize_items(items: &ItemCollection) -> serde_json::Result<String> {
    let stored: IndexMap<&ItemId, StoredItem> = items
        .iter()
        .map(|(id, item)| {
            (
                id,
                StoredItem {
                    text: item.text.clone(),
                    working: item.context.is_working(),
                    check: Check::from_completed(item.completed),
                },
            )
        })
        .collect();
    serde_json::to_string(&stored)
}

/// Parse a collection written by `serialize_items`, keeping key order
pub fn parse_items(content: &str) -> serde_json::Result<ItemCollection> {
    let stored: IndexMap<ItemId, StoredItem> = serde_json::from_str(content)?;
    Ok(stored
        .into_iter()
        .map(|(id, s)| {
            let item = Item {
                id: id.clone(),
                text: s.text,
                context: Context::from_working(s.working),
                completed: s.check.is_completed(),
            };
            (id, item)
        })
        .collect())
}

/// `true` = Work, `false` = Travel
pub fn serialize_context(context: Context) -> String {
    context.is_working().to_string()
}

pub fn parse_context(content: &str) -> serde_json::Result<Context> {
    let working: bool = serde_json::from_str(content)?;
    Ok(Context::from_working(working))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: &str, text: &str, context: Context, completed: bool) -> Item {
        Item {
            id: ItemId::from(id),
            text: text.to_string(),
            context,
            completed,
        }
    }

    #[test]
    fn test_serialize_items_shape() {
        let mut items = ItemCollection::new();
        let a = item("1", "Buy milk", Context::Work, false);
        let b = item("2", "Lisbon", Context::Travel, true);
        items.insert(a.id.clone(), a);
        items.insert(b.id.clone(), b);

        let json = serialize_items(&items).unwrap();
        assert_eq!(
            json,
            r#"{"1":{"text":"Buy milk","working":true,"check":"passive"},"2":{"text":"Lisbon","working":false,"check":"active"}}"#
        );
    }

    #[test]
    fn test_parse_legacy_collection() {
        let json = r#"{
            "1700000000002": {"text": "Book hotel", "working": false, "check": "passive"},
            "1700000000001": {"text": "Ship release", "working": true, "check": "active"}
        }"#;

        let items = parse_items(json).unwrap();
        let texts: Vec<&str> = items.values().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Book hotel", "Ship release"]);

        let ship = &items[&ItemId::from("1700000000001")];
        assert_eq!(ship.context, Context::Work);
        assert!(ship.completed);

        let hotel = &items[&ItemId::from("1700000000002")];
        assert_eq!(hotel.context, Context::Travel);
        assert!(!hotel.completed);
    }

    #[test]
    fn test_parse_empty_collection() {
        assert!(parse_items("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_items_rejects_unknown_check() {
        let json = r#"{"1": {"text": "x", "working": true, "check": "done"}}"#;
        assert!(parse_items(json).is_err());
    }

    #[test]
    fn test_context_encoding() {
        assert_eq!(serialize_context(Context::Work), "true");
        assert_eq!(serialize_context(Context::Travel), "false");
        assert_eq!(parse_context("true").unwrap(), Context::Work);
        assert_eq!(parse_context("false").unwrap(), Context::Travel);
        assert!(parse_context("\"work\"").is_err());
    }

    #[test]
    fn test_items_round_trip_preserves_order_and_fields() {
        let mut items = ItemCollection::new();
        for (text, ctx, done) in [
            ("z last-created first", Context::Travel, false),
            ("a", Context::Work, true),
            ("quotes \" and \\ slashes", Context::Work, false),
        ] {
            let mut it = Item::new(text.to_string(), ctx);
            it.completed = done;
            items.insert(it.id.clone(), it);
        }

        let parsed = parse_items(&serialize_items(&items).unwrap()).unwrap();
        assert_eq!(parsed, items);
    }
}
