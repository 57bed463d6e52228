use std::hash::Hash;

use indexmap::IndexMap;

/// Builds a map with one zero entry per distinct key, in first-seen order.
pub fn seed_zeroed<K, I>(keys: I) -> IndexMap<K, usize>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut map = IndexMap::new();
    for key in keys {
        map.entry(key).or_insert(0);
    }
    map
}

/// Increments an already-seeded key. Returns `false` if the key is absent.
pub fn increment<K: Hash + Eq>(map: &mut IndexMap<K, usize>, key: &K) -> bool {
    match map.get_mut(key) {
        Some(count) => {
            *count += 1;
            true
        }
        None => false,
    }
}

/// Sum of all counts in a mapping.
pub fn total<K>(map: &IndexMap<K, usize>) -> usize {
    map.values().sum()
}
