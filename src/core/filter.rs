//! Category whitelist predicate.

use std::collections::HashSet;

/// Optional whitelist over category names, trimmed and case-insensitive.
/// An absent or empty set passes everything; the filter must run before
/// bucketing so excluded categories never contribute bucket dates.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    names: Option<HashSet<String>>, // stored lowercase
}

impl CategoryFilter {
    pub fn pass_all() -> Self {
        Self { names: None }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: HashSet<String> = names
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if set.is_empty() {
            Self::pass_all()
        } else {
            Self { names: Some(set) }
        }
    }

    pub fn is_pass_all(&self) -> bool {
        self.names.is_none()
    }

    pub fn allows(&self, category: &str) -> bool {
        match &self.names {
            None => true,
            Some(set) => set.contains(&category.trim().to_lowercase()),
        }
    }
}
