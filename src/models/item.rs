use serde::{Deserialize, Serialize};

/// Core menu item entity. `id` is assigned by the store, never by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// URI of the item's image.
    pub image: String,
}

impl Item {
    pub fn from_fields(id: i64, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            description: fields.description,
            image: fields.image,
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of POST and PUT requests: every item field except the identifier.
/// PUT is a full replacement, so create and update share this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}
