//! Identifier management using string interning for efficient storage and comparison.
//!
//! This module provides the [`Id`] type used to name nodes and clusters in a
//! diagram. Interning keeps ids `Copy` so they can be reused freely across
//! edge declarations.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// Uses `Mutex` for thread-safe access to the interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Interned identifier for diagram nodes and clusters.
///
/// # Examples
///
/// ```
/// use wafviz_core::identifier::Id;
///
/// let firehose = Id::new("firehose");
/// let backend = Id::new("backend");
///
/// // Nested ids address clusters inside clusters
/// let lambdas = backend.create_nested(Id::new("lambdas"));
/// assert_eq!(lambdas, "backend::lambdas");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string slice.
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates a nested id by joining parent and child with a `::` separator.
    ///
    /// Used for clusters declared inside another cluster, so that two
    /// clusters with the same short name in different parents stay distinct.
    pub fn create_nested(&self, child_id: Id) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let parent_str = interner
            .resolve(self.0)
            .expect("Parent ID should exist in interner");
        let child_str = interner
            .resolve(child_id.0)
            .expect("Child ID should exist in interner");
        let nested_name = format!("{}::{}", parent_str, child_str);
        let symbol = interner.get_or_intern(&nested_name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("firehose");
        let id2 = Id::new("firehose");
        let id3 = Id::new("bedrock");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "firehose");
    }

    #[test]
    fn test_create_nested() {
        let parent = Id::new("backend");
        let child1 = Id::new("lambdas");
        let child2 = Id::new("storage");

        let nested1 = parent.create_nested(child1);
        let nested2 = parent.create_nested(child2);

        assert_ne!(nested1, nested2);
        assert_eq!(nested1, "backend::lambdas");
        assert_eq!(nested2, "backend::storage");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("demo_waf");
        assert_eq!(format!("{}", id), "demo_waf");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_copy_trait() {
        let id1 = Id::new("copy_test");
        let id2 = id1;
        let id3 = id1;

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1, "copy_test");
    }
}
