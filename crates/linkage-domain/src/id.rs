//! Node identifier module

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in the graph document
///
/// Derived from the record name: lower-cased, with every character outside
/// `[a-z0-9_]` replaced by `_`. The derivation is deterministic so detail
/// views can look a node up by id across runs as long as names are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Derive the id for a record name
    ///
    /// # Examples
    ///
    /// ```
    /// use linkage_domain::NodeId;
    ///
    /// assert_eq!(NodeId::from_name("Yuri Nosenko").as_str(), "yuri_nosenko");
    /// assert_eq!(NodeId::from_name("John F. Kennedy").as_str(), "john_f__kennedy");
    /// ```
    pub fn from_name(name: &str) -> Self {
        let slug = name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        Self(slug)
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty (only possible for an empty name)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
