//! The item-to-category catalog.
//!
//! A [`Catalog`] maps known items to a category label and is used only to
//! scope queries; it plays no part in graph mutation. It is built once from
//! explicit entries (typically deserialized from a configuration file) and
//! never mutated afterwards. Items absent from the catalog have no category
//! and are excluded from category-scoped queries.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::Item;

/// A label grouping related items, such as `dairy` or `drinks`.
///
/// # Example
///
/// ```
/// use affinity_core::Category;
///
/// let category = Category::new("dairy");
/// assert_eq!(category.as_str(), "dairy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Create a new category label.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the label as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Category {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable mapping from items to their category.
///
/// # Example
///
/// ```
/// use affinity_core::{Catalog, Category, Item};
///
/// let catalog = Catalog::from_entries([
///     ("whole milk", "dairy"),
///     ("yogurt", "dairy"),
///     ("soda", "drinks"),
/// ])?;
///
/// assert_eq!(catalog.category_of(&Item::new("yogurt")), Some(&Category::new("dairy")));
/// assert!(catalog.has_category(&Category::new("drinks")));
/// assert!(!catalog.has_category(&Category::new("meat")));
/// # Ok::<(), affinity_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<Item, Category>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Build a catalog from `(item, category)` entries.
    ///
    /// Assigning the same item to the same category twice is tolerated;
    /// assigning it to two different categories is a
    /// [`CatalogError::ConflictingCategory`].
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Item>,
        V: Into<Category>,
    {
        let mut map: HashMap<Item, Category> = HashMap::new();
        for (item, category) in entries {
            let item = item.into();
            let category = category.into();
            match map.get(&item) {
                Some(existing) if *existing != category => {
                    return Err(CatalogError::ConflictingCategory {
                        item,
                        existing: existing.clone(),
                        requested: category,
                    });
                }
                Some(_) => {}
                None => {
                    map.insert(item, category);
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Look up the category of an item.
    #[inline]
    #[must_use]
    pub fn category_of(&self, item: &Item) -> Option<&Category> {
        self.entries.get(item)
    }

    /// Check whether an item is known to the catalog.
    #[inline]
    #[must_use]
    pub fn contains_item(&self, item: &Item) -> bool {
        self.entries.contains_key(item)
    }

    /// Check whether at least one item is assigned to the category.
    #[must_use]
    pub fn has_category(&self, category: &Category) -> bool {
        self.entries.values().any(|c| c == category)
    }

    /// All items assigned to the category, sorted lexicographically.
    #[must_use]
    pub fn items_in(&self, category: &Category) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .entries
            .iter()
            .filter(|(_, c)| *c == category)
            .map(|(item, _)| item.clone())
            .collect();
        items.sort_unstable();
        items
    }

    /// All distinct categories, sorted lexicographically.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.entries.values().cloned().collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Number of cataloged items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_entries([
            ("whole milk", "dairy"),
            ("yogurt", "dairy"),
            ("soda", "drinks"),
            ("bottled water", "drinks"),
        ])
        .expect("no conflicts")
    }

    #[test]
    fn lookup_and_membership() {
        let catalog = sample();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.category_of(&Item::new("soda")), Some(&Category::new("drinks")));
        assert_eq!(catalog.category_of(&Item::new("bread")), None);
        assert!(catalog.contains_item(&Item::new("yogurt")));
    }

    #[test]
    fn items_in_is_sorted() {
        let catalog = sample();
        let names: Vec<_> =
            catalog.items_in(&Category::new("drinks")).iter().map(|i| i.to_string()).collect();
        assert_eq!(names, vec!["bottled water", "soda"]);
    }

    #[test]
    fn items_in_unknown_category_is_empty() {
        let catalog = sample();
        assert!(catalog.items_in(&Category::new("meat")).is_empty());
        assert!(!catalog.has_category(&Category::new("meat")));
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let catalog = sample();
        let names: Vec<_> = catalog.categories().iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["dairy", "drinks"]);
    }

    #[test]
    fn duplicate_entry_same_category_is_tolerated() {
        let catalog =
            Catalog::from_entries([("yogurt", "dairy"), ("yogurt", "dairy")]).expect("no conflict");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn conflicting_categories_error() {
        let err = Catalog::from_entries([("yogurt", "dairy"), ("yogurt", "drinks")])
            .expect_err("conflict");
        match err {
            CatalogError::ConflictingCategory { item, existing, requested } => {
                assert_eq!(item.as_str(), "yogurt");
                assert_eq!(existing.as_str(), "dairy");
                assert_eq!(requested.as_str(), "drinks");
            }
        }
    }

    #[test]
    fn deserializes_from_json_object() {
        let json = r#"{"whole milk": "dairy", "soda": "drinks"}"#;
        let catalog: Catalog = serde_json::from_str(json).expect("deserialize");
        assert_eq!(catalog.category_of(&Item::new("whole milk")), Some(&Category::new("dairy")));
    }
}
