//! Hierarchical group identifiers.
//!
//! A [`GroupId`] is an immutable path naming one partition of rows within
//! a grouping. The empty path is the root and denotes a table's own
//! (ungrouped) rows; deeper paths are produced by [`GroupId::extend`].
//! Identifiers compare by segment sequence and display as `/seg/seg`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable hierarchical path identifying one partition of rows.
///
/// The default value is the root path. Extension never mutates: it always
/// returns a fresh identifier, so an id held by one table can be safely
/// extended by another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(Vec<String>);

impl GroupId {
    /// The root identifier (empty path), denoting a table's own rows.
    pub fn root() -> Self {
        GroupId(Vec::new())
    }

    /// Whether this is the root identifier.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a new identifier with `segment` appended to this path.
    pub fn extend(&self, segment: impl Into<String>) -> GroupId {
        let mut path = self.0.clone();
        path.push(segment.into());
        GroupId(path)
    }

    /// Return a new identifier with all of `other`'s segments appended.
    ///
    /// Concatenating the root is the identity in either position.
    pub fn concat(&self, other: &GroupId) -> GroupId {
        let mut path = self.0.clone();
        path.extend(other.0.iter().cloned());
        GroupId(path)
    }

    /// The path segments, outermost first. Empty for the root.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty_path() {
        assert!(GroupId::root().is_root());
        assert_eq!(GroupId::root(), GroupId::default());
        assert_eq!(GroupId::root().segments(), &[] as &[String]);
    }

    #[test]
    fn test_extend_is_pure() {
        let root = GroupId::root();
        let a = root.extend("a");
        let ab = a.extend("b");

        assert!(root.is_root());
        assert_eq!(a.segments(), &["a".to_string()]);
        assert_eq!(ab.segments(), &["a".to_string(), "b".to_string()]);
        assert_ne!(a, ab);
    }

    #[test]
    fn test_equality_by_segments() {
        assert_eq!(GroupId::root().extend("x"), GroupId::root().extend("x"));
        assert_ne!(GroupId::root().extend("x"), GroupId::root().extend("y"));
    }

    #[test]
    fn test_concat() {
        let a = GroupId::root().extend("a");
        let bc = GroupId::root().extend("b").extend("c");

        assert_eq!(a.concat(&bc), a.extend("b").extend("c"));
        assert_eq!(a.concat(&GroupId::root()), a);
        assert_eq!(GroupId::root().concat(&a), a);
    }

    #[test]
    fn test_display_as_path() {
        assert_eq!(GroupId::root().to_string(), "/");
        assert_eq!(GroupId::root().extend("0").to_string(), "/0");
        assert_eq!(GroupId::root().extend("a").extend("b").to_string(), "/a/b");
    }
}
