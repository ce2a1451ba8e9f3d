pub mod enums;
pub mod item;

pub use enums::{Check, Context, UiMode};
pub use item::{items_in_context, Item, ItemCollection, ItemId};
