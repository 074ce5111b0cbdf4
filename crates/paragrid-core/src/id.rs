//! Strongly-typed grid identifier.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Identifies a grid within a [`GridStore`](crate::GridStore).
///
/// Backed by a shared string so that cells, positions, and store keys can
/// all hold the same id without reallocating. Hashes and compares as the
/// underlying string, so stores can be queried with a plain `&str`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId(Arc<str>);

impl GridId {
    /// Create an id from any string-like value.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GridId {
    fn from(v: &str) -> Self {
        Self(Arc::from(v))
    }
}

impl From<String> for GridId {
    fn from(v: String) -> Self {
        Self(Arc::from(v))
    }
}

impl Borrow<str> for GridId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GridId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for GridId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for GridId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn clones_share_storage() {
        let a = GridId::from("inner");
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.0, &b.0));
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(GridId::from("main"), 7);
        assert_eq!(map.get("main"), Some(&7));
        assert_eq!(map.get("other"), None);
    }

    #[test]
    fn compares_with_str() {
        assert_eq!(GridId::new(String::from("a")), "a");
        assert_eq!(GridId::from("a").to_string(), "a");
    }
}
