//! Student records and identifiers.

use std::fmt;

/// Identity of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of an attribute tag. The tag catalog itself lives outside
/// this crate; only identities are matched here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagId(pub u32);

/// A person to be seated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    pub id: StudentId,
    /// Display name. May be blank.
    pub name: String,
    /// Optional roll number, used for display ordering.
    pub number: Option<u32>,
    /// Attribute tags. Order only matters for display.
    pub tags: Vec<TagId>,
}

impl Student {
    pub fn new(id: StudentId) -> Self {
        Self {
            id,
            name: String::new(),
            number: None,
            tags: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = TagId>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn has_tag(&self, tag: TagId) -> bool {
        self.tags.contains(&tag)
    }

    /// No name, no number and no tags.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.number.is_none() && self.tags.is_empty()
    }

    /// Name for messages; blank names read as "unnamed".
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "unnamed"
        } else {
            &self.name
        }
    }
}
