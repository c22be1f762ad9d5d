use super::data::ArtworkId;
use super::item::{Action, Item};
use super::notice::Notice;

/// The ordered set of artworks shown on screen
///
/// Owns one `Item` per displayed artwork. New artworks are prepended,
/// duplicates are allowed. Each item gets a key that is never reused, so
/// results of requests made by a removed item cannot reach another one.
#[derive(Debug, Default)]
pub struct Collection {
    items: Vec<Item>,
    next_key: u64,
}

impl Collection {
    /// Build the collection from the seed list, keeping its order
    ///
    /// Returns the metadata requests of every seeded item.
    pub fn seeded(ids: &[ArtworkId]) -> (Self, Vec<(u64, Action)>) {
        let mut collection = Collection::default();
        let mut actions = Vec::with_capacity(ids.len());

        for &id in ids {
            let (item, action) = collection.create(id);
            actions.push((item.key(), action));
            collection.items.push(item);
        }

        (collection, actions)
    }

    /// Prepend the artwork typed by the user
    ///
    /// Blank or non-numeric input is ignored and returns `None`.
    pub fn add(&mut self, input: &str) -> Option<(u64, Action)> {
        let id = match input.parse::<ArtworkId>() {
            Ok(id) => id,
            Err(_) => {
                tracing::debug!(input, "ignoring invalid artwork id");
                return None;
            }
        };

        let (item, action) = self.create(id);
        let key = item.key();
        self.items.insert(0, item);

        tracing::info!(%id, "artwork added");
        Some((key, action))
    }

    /// Remove the first item showing `id`
    ///
    /// Returns the notice to display, or `None` if `id` is not in the collection.
    pub fn remove(&mut self, id: ArtworkId) -> Option<Notice> {
        let key = self.items.iter().find(|item| item.id() == id)?.key();
        self.remove_key(key)
    }

    /// Remove the item with `key`, i.e. the card the user clicked
    ///
    /// Unlike `remove`, this picks the right card when an id is shown twice.
    pub fn remove_key(&mut self, key: u64) -> Option<Notice> {
        let index = self.items.iter().position(|item| item.key() == key)?;
        let id = self.items.remove(index).id();

        tracing::info!(%id, key, "artwork removed");
        Some(Notice::Removed(id))
    }

    pub fn get_mut(&mut self, key: u64) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Displayed identifiers, in display order
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.items.iter().map(Item::id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn create(&mut self, id: ArtworkId) -> (Item, Action) {
        let key = self.next_key;
        self.next_key += 1;
        Item::new(key, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[u64]) -> Vec<ArtworkId> {
        values.iter().copied().map(ArtworkId).collect()
    }

    #[test]
    fn test_seed_preserves_order() {
        let seed = ids(&[27992, 27998, 27999]);
        let (collection, actions) = Collection::seeded(&seed);

        assert_eq!(collection.ids(), seed);
        let requested: Vec<Action> = actions.into_iter().map(|(_, action)| action).collect();
        assert_eq!(
            requested,
            seed.iter().copied().map(Action::FetchArtwork).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_add_prepends() {
        let (mut collection, _) = Collection::seeded(&ids(&[1, 2]));

        let (key, action) = collection.add("27992").unwrap();
        assert_eq!(action, Action::FetchArtwork(ArtworkId(27992)));
        assert_eq!(collection.ids(), ids(&[27992, 1, 2]));
        assert_eq!(collection.iter().next().map(Item::key), Some(key));
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let (mut collection, _) = Collection::seeded(&ids(&[1, 2]));

        assert!(collection.add("").is_none());
        assert!(collection.add("   ").is_none());
        assert!(collection.add("abc").is_none());
        assert_eq!(collection.ids(), ids(&[1, 2]));
    }

    #[test]
    fn test_add_allows_duplicates_with_distinct_keys() {
        let (mut collection, actions) = Collection::seeded(&ids(&[5]));
        let (key, _) = collection.add("5").unwrap();

        assert_eq!(collection.ids(), ids(&[5, 5]));
        assert_ne!(key, actions[0].0);
    }

    #[test]
    fn test_remove_notifies_once() {
        let (mut collection, _) = Collection::seeded(&ids(&[1, 2, 3]));

        assert_eq!(
            collection.remove(ArtworkId(2)),
            Some(Notice::Removed(ArtworkId(2)))
        );
        assert_eq!(collection.ids(), ids(&[1, 3]));
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let (mut collection, _) = Collection::seeded(&ids(&[4, 1, 4]));

        collection.remove(ArtworkId(4));
        assert_eq!(collection.ids(), ids(&[1, 4]));
    }

    #[test]
    fn test_remove_key_keeps_duplicates_apart() {
        let (mut collection, actions) = Collection::seeded(&ids(&[5]));
        let seeded_key = actions[0].0;
        let (added_key, _) = collection.add("5").unwrap();

        assert_eq!(
            collection.remove_key(seeded_key),
            Some(Notice::Removed(ArtworkId(5)))
        );
        let keys: Vec<u64> = collection.iter().map(Item::key).collect();
        assert_eq!(keys, vec![added_key]);
        assert_eq!(collection.remove_key(seeded_key), None);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (mut collection, _) = Collection::seeded(&ids(&[1]));

        assert_eq!(collection.remove(ArtworkId(99)), None);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_removed_key_is_not_reachable() {
        let (mut collection, actions) = Collection::seeded(&ids(&[1, 2]));
        let removed_key = actions[0].0;

        collection.remove(ArtworkId(1));
        assert!(collection.get_mut(removed_key).is_none());

        collection.add("1");
        assert!(collection.get_mut(removed_key).is_none());
    }
}
