use chrono::Utc;
use indexmap::IndexMap;

use crate::models::{Item, ItemFields};

/// Authoritative in-memory mapping of identifier → item.
///
/// IndexMap keeps iteration in insertion order, which is the order `list`
/// reports. Identifiers are seeded from the wall clock in milliseconds and
/// forced to be strictly increasing, so rapid successive creates within the
/// same clock tick still get distinct ids and a deleted id is never handed
/// out again while the process is alive.
pub struct ItemStore {
    items: IndexMap<i64, Item>,
    last_id: i64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            last_id: 0,
        }
    }

    /// All items, in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Item> {
        self.items.get(&id).cloned()
    }

    /// Store a new item under a freshly assigned id and return it.
    pub fn create(&mut self, fields: ItemFields) -> Item {
        let id = self.next_id();
        let item = Item::from_fields(id, fields);
        self.items.insert(id, item.clone());
        item
    }

    /// Full replacement of every field except `id`. Returns `None` and leaves
    /// the map untouched when `id` is not present.
    pub fn update(&mut self, id: i64, fields: ItemFields) -> Option<Item> {
        if !self.items.contains_key(&id) {
            return None;
        }
        let item = Item::from_fields(id, fields);
        self.items.insert(id, item.clone());
        Some(item)
    }

    /// Delete the item for `id`, reporting whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        // shift_remove keeps the remaining items in insertion order
        self.items.shift_remove(&id).is_some()
    }

    fn next_id(&mut self) -> i64 {
        self.last_id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fields(name: &str, price: f64) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            price,
            description: format!("{} description", name),
            image: format!("http://example.com/{}.png", name.to_lowercase()),
        }
    }

    // ── Id assignment ──────────────────────────────────────────────────────────

    #[test]
    fn created_ids_are_unique_and_strictly_increasing() {
        let mut store = ItemStore::new();
        let ids: Vec<i64> = (0..500)
            .map(|i| store.create(fields(&format!("Item {}", i), 100.0)).id)
            .collect();

        let distinct: HashSet<i64> = ids.iter().copied().collect();
        assert_eq!(distinct.len(), ids.len(), "Every assigned id must be unique");
        assert!(
            ids.windows(2).all(|w| w[0] < w[1]),
            "Ids must be strictly increasing across creates"
        );
    }

    #[test]
    fn created_ids_are_positive_and_clock_scaled() {
        let mut store = ItemStore::new();
        let id = store.create(fields("Burger", 599.0)).id;
        // Millisecond clock readings are 13-digit numbers in this era
        assert!(id > 1_000_000_000_000, "Id must come from the ms clock, got {}", id);
    }

    #[test]
    fn removed_id_is_not_reassigned() {
        let mut store = ItemStore::new();
        let first = store.create(fields("Burger", 599.0)).id;
        assert!(store.remove(first));
        let second = store.create(fields("Pizza", 299.0)).id;
        assert!(second > first, "A deleted id must never be handed out again");
    }

    // ── CRUD round trips ───────────────────────────────────────────────────────

    #[test]
    fn new_store_lists_nothing() {
        assert!(ItemStore::new().list().is_empty());
    }

    #[test]
    fn get_returns_exactly_what_create_returned() {
        let mut store = ItemStore::new();
        let created = store.create(fields("Salad", 499.0));
        assert_eq!(store.get(created.id), Some(created));
    }

    #[test]
    fn get_of_unknown_id_is_none() {
        assert_eq!(ItemStore::new().get(123), None);
    }

    #[test]
    fn remove_then_get_is_none() {
        let mut store = ItemStore::new();
        let created = store.create(fields("Tea", 199.0));
        assert!(store.remove(created.id));
        assert_eq!(store.get(created.id), None);
    }

    #[test]
    fn remove_of_unknown_id_reports_absence_and_mutates_nothing() {
        let mut store = ItemStore::new();
        store.create(fields("Tea", 199.0));
        assert!(!store.remove(999));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn update_replaces_all_fields_but_keeps_the_id() {
        let mut store = ItemStore::new();
        let created = store.create(fields("Burger", 599.0));

        let updated = store
            .update(created.id, fields("Cheeseburger", 699.0))
            .expect("existing id must be updatable");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Cheeseburger");
        assert_eq!(updated.price, 699.0);
        assert_eq!(store.get(created.id), Some(updated));
    }

    #[test]
    fn update_of_unknown_id_is_none_and_inserts_nothing() {
        let mut store = ItemStore::new();
        assert_eq!(store.update(42, fields("Ghost", 0.0)), None);
        assert!(store.list().is_empty());
    }

    // ── Ordering ───────────────────────────────────────────────────────────────

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = ItemStore::new();
        for name in ["Burger", "Pizza", "Tea"] {
            store.create(fields(name, 100.0));
        }
        let names: Vec<String> = store.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Burger", "Pizza", "Tea"]);
    }

    #[test]
    fn removal_keeps_remaining_items_in_insertion_order() {
        let mut store = ItemStore::new();
        let ids: Vec<i64> = ["Burger", "Pizza", "Tea"]
            .iter()
            .map(|name| store.create(fields(name, 100.0)).id)
            .collect();

        assert!(store.remove(ids[1]));

        let names: Vec<String> = store.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Burger", "Tea"]);
    }
}
