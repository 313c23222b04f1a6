//! Operation exclusion by tag or description.

use std::fmt;

use apisync_schema::Operation;
use indexmap::IndexSet;

/// Configured exclusion entries.
///
/// An operation is excluded when one of its tags equals an entry, or when its
/// description contains an entry as a substring. A missing description reads
/// as empty, and an empty entry is a substring of every description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    entries: IndexSet<String>,
}

/// Why an operation was excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// One of the operation's tags is an exclusion entry.
    Tag(String),
    /// The operation's description contains an exclusion entry.
    Description(String),
}

impl ExclusionSet {
    /// Create a set from entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for entry in entries {
            set.insert(entry);
        }
        set
    }

    /// Add an entry. Returns false if it was already present.
    pub fn insert(&mut self, entry: impl Into<String>) -> bool {
        self.entries.insert(entry.into())
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Check an operation against the set. Tags are checked before the
    /// description.
    pub fn check(&self, operation: &Operation) -> Option<Exclusion> {
        if let Some(tag) = operation.tags.iter().find(|tag| self.contains(tag)) {
            return Some(Exclusion::Tag(tag.clone()));
        }
        let description = operation.description.as_deref().unwrap_or_default();
        self.iter()
            .find(|entry| description.contains(entry))
            .map(|entry| Exclusion::Description(entry.to_string()))
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::Tag(tag) => write!(f, "tag '{}'", tag),
            Exclusion::Description(entry) => write!(f, "description mentions '{}'", entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation(tags: &[&str], description: Option<&str>) -> Operation {
        Operation {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: description.map(str::to_string),
            ..Operation::default()
        }
    }

    #[test]
    fn test_tag_match() {
        let set = ExclusionSet::new(["@internal"]);
        assert_eq!(
            set.check(&operation(&["users", "@internal"], None)),
            Some(Exclusion::Tag("@internal".into()))
        );
        assert_eq!(set.check(&operation(&["users"], None)), None);
        // Tags must match exactly.
        assert_eq!(set.check(&operation(&["@internal-ish"], None)), None);
    }

    #[test]
    fn test_description_substring() {
        let set = ExclusionSet::new(["@admin_only"]);
        assert_eq!(
            set.check(&operation(&[], Some("Reset caches. @admin_only"))),
            Some(Exclusion::Description("@admin_only".into()))
        );
        assert_eq!(set.check(&operation(&[], Some("Reset caches."))), None);
    }

    #[test]
    fn test_tag_checked_first() {
        let set = ExclusionSet::new(["@internal", "@admin_only"]);
        let op = operation(&["@admin_only"], Some("@internal"));
        assert_eq!(set.check(&op), Some(Exclusion::Tag("@admin_only".into())));
    }

    #[test]
    fn test_empty_entry_matches_everything() {
        let mut set = ExclusionSet::new(["", "@internal", "@internal"]);
        assert_eq!(set.len(), 2);
        assert!(!set.insert(""));
        assert_eq!(
            set.check(&operation(&[""], None)),
            Some(Exclusion::Tag(String::new()))
        );
        assert_eq!(
            set.check(&operation(&[], Some("anything"))),
            Some(Exclusion::Description(String::new()))
        );
        assert_eq!(
            set.check(&operation(&["users"], None)),
            Some(Exclusion::Description(String::new()))
        );
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExclusionSet::default();
        assert!(set.is_empty());
        assert_eq!(set.check(&operation(&["@internal"], Some("@internal"))), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Exclusion::Tag("@internal".into()).to_string(), "tag '@internal'");
        assert_eq!(
            Exclusion::Description("@beta".into()).to_string(),
            "description mentions '@beta'"
        );
    }
}
