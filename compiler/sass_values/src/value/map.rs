//! Insertion-ordered maps keyed by value.

use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use sass_ir::Span;

use super::hash_cache::HashCache;
use super::list::{ListValue, Separator};
use super::{combine_unordered, Value};

type Entries = IndexMap<Value, Value, FxBuildHasher>;

/// Map from values to values.
///
/// Keys are looked up through `Value`'s hash and equality, so a key
/// built separately but equal to a stored one finds it. Keys are shared
/// handles; mutating one clones it out of the map.
#[derive(Clone, Debug)]
pub struct MapValue {
    entries: Entries,
    duplicate_key: Option<Value>,
    expanded: bool,
    span: Span,
    hash: HashCache,
}

impl MapValue {
    pub fn new(span: Span) -> Self {
        MapValue {
            entries: Entries::default(),
            duplicate_key: None,
            expanded: false,
            span,
            hash: HashCache::new(),
        }
    }

    /// Build from pairs; later duplicates overwrite earlier ones and are
    /// recorded in [`MapValue::duplicate_key`].
    pub fn from_pairs(span: Span, pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut map = MapValue::new(span);
        for (key, value) in pairs {
            map.insert(key, value);
        }
        map
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// First key that was inserted twice, if any.
    pub fn duplicate_key(&self) -> Option<&Value> {
        self.duplicate_key.as_ref()
    }

    pub fn is_invisible(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a pair, returning the value previously stored under `key`.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.expanded = false;
        self.hash.invalidate();
        let key_copy = self.duplicate_key.is_none().then(|| key.clone());
        let previous = self.entries.insert(key, value);
        if previous.is_some() && self.duplicate_key.is_none() {
            self.duplicate_key = key_copy;
        }
        previous
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter()
    }

    /// Entry at insertion position `index`.
    pub fn get_index(&self, index: usize) -> Option<(&Value, &Value)> {
        self.entries.get_index(index)
    }

    /// The pair at `index` as a two-item space list.
    pub fn value_at_index(&self, index: usize) -> Option<Value> {
        self.get_index(index)
            .map(|(key, value)| pair(self.span, key.clone(), value.clone()))
    }

    /// Comma list of `key value` space lists, in insertion order.
    pub fn to_list(&self, span: Span) -> ListValue {
        let items = self
            .entries
            .iter()
            .map(|(key, value)| pair(span, key.clone(), value.clone()))
            .collect();
        ListValue::new(span, Separator::Comma, items)
    }

    pub fn hash_code(&self) -> u64 {
        self.hash.get_or_compute(|h| {
            self.entries.len().hash(h);
            combine_unordered(
                self.entries
                    .iter()
                    .map(|(key, value)| (key.hash_code(), value.hash_code())),
            )
            .hash(h);
        })
    }
}

fn pair(span: Span, key: Value, value: Value) -> Value {
    Value::list(ListValue::new(span, Separator::Space, vec![key, value]))
}

/// Order-independent: maps with the same pairs are equal.
impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for MapValue {}
