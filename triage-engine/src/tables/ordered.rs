// Insertion-ordered key/value table
//
// Lookup tables are scanned first-match in declaration order, so the order of
// entries is part of their meaning. Tables are small (tens of entries), which
// keeps a linear scan over a Vec cheaper than any hashing scheme.
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTable<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedTable<K, V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K, V> OrderedTable<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// First entry, in insertion order, whose key satisfies `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<(&K, &V)>
    where
        P: FnMut(&K) -> bool,
    {
        self.iter().find(|(k, _)| predicate(k))
    }
}

impl<K: PartialEq, V> OrderedTable<K, V> {
    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Value for `key`, appending a fresh one at the end when absent
    #[allow(clippy::indexing_slicing)] // position is in bounds
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let position = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(position) => position,
            None => {
                self.entries.push((key, default()));
                self.entries.len() - 1
            }
        };
        let (_, value) = &mut self.entries[position];
        value
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for OrderedTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedTable<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedTable<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedTableVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for OrderedTableVisitor<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    type Value = OrderedTable<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = OrderedTable::new();
        while let Some((key, value)) = access.next_entry()? {
            table.insert(key, value);
        }
        Ok(table)
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedTable<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedTableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut table = OrderedTable::new();
        table.insert("b", 1);
        table.insert("a", 2);
        assert_eq!(table.insert("b", 3), Some(1));

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(&"b", &3), (&"a", &2)]);
    }

    #[test]
    fn test_find_is_first_match() {
        let table: OrderedTable<&str, u8> = [("chest", 1), ("chest pain", 2)].into_iter().collect();
        let hit = table.find(|k| "severe chest pain".contains(k));
        assert_eq!(hit, Some((&"chest", &1)));
    }

    #[test]
    fn test_get_or_insert_appends() {
        let mut table: OrderedTable<&str, Vec<u8>> = OrderedTable::new();
        table.get_or_insert_with("x", Vec::new).push(1);
        table.get_or_insert_with("y", Vec::new).push(2);
        table.get_or_insert_with("x", Vec::new).push(3);

        assert_eq!(table.get(&"x"), Some(&vec![1, 3]));
        assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_json_map_preserves_order() {
        let table: OrderedTable<String, u8> =
            [("zeta".to_string(), 1), ("alpha".to_string(), 2)].into_iter().collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);

        let back: OrderedTable<String, u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
