/// Insertion-ordered collections keyed by element title.
///
/// Pods and sub-pods are unique by title within their parent: inserting a
/// second element with an already-present title fails, and a title-keyed
/// lookup returns the single match. Iteration preserves insertion order,
/// which for decoded responses is server order.
use std::ops::Index;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Implemented by elements that are addressable by their title.
pub trait Titled {
    fn title(&self) -> &str;
}

/// Rejection of an insert whose title is already present in the collection.
#[derive(Debug, thiserror::Error)]
#[error("duplicate title in collection: {title:?}")]
pub struct DuplicateTitleError {
    pub title: String,
}

/// An insertion-ordered collection of titled elements with unique titles.
///
/// Exposes both positional access (`first`, `get_index`, indexing) and
/// title-keyed lookup (`get`, case-sensitive exact match).
#[derive(Debug, Clone, PartialEq)]
pub struct TitledList<T> {
    items: Vec<T>,
}

impl<T> Default for TitledList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Titled> TitledList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item`, rejecting it when an element with the same title is
    /// already present.
    pub fn push(&mut self, item: T) -> Result<(), DuplicateTitleError> {
        if self.get(item.title()).is_some() {
            return Err(DuplicateTitleError {
                title: item.title().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// The element whose title matches `title` exactly, if any.
    pub fn get(&self, title: &str) -> Option<&T> {
        self.items.iter().find(|item| item.title() == title)
    }
}

impl<T> TitledList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for TitledList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: Titled> TryFrom<Vec<T>> for TitledList<T> {
    type Error = DuplicateTitleError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        for item in items {
            list.push(item)?;
        }
        Ok(list)
    }
}

impl<T> IntoIterator for TitledList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TitledList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for TitledList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

/// Deserializes as a plain sequence, then re-inserts element by element so
/// that a response carrying duplicate titles fails the decode.
impl<'de, T> Deserialize<'de> for TitledList<T>
where
    T: Deserialize<'de> + Titled,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Pod;

    fn pod(title: &str) -> Pod {
        Pod {
            title: title.to_string(),
            ..Pod::default()
        }
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = TitledList::new();
        list.push(pod("Input")).unwrap();
        list.push(pod("Solution")).unwrap();
        list.push(pod("Plot")).unwrap();

        let titles: Vec<&str> = list.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Input", "Solution", "Plot"]);
        assert_eq!(list[1].title, "Solution");
        assert_eq!(list.first().unwrap().title, "Input");
    }

    #[test]
    fn push_rejects_duplicate_title() {
        let mut list = TitledList::new();
        list.push(pod("Result")).unwrap();

        let err = list.push(pod("Result")).unwrap_err();
        assert_eq!(err.title, "Result");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn get_is_case_sensitive_exact_match() {
        let mut list = TitledList::new();
        list.push(pod("Solution")).unwrap();

        assert!(list.get("Solution").is_some());
        assert!(list.get("solution").is_none());
        assert!(list.get("Solutio").is_none());
    }

    #[test]
    fn try_from_rejects_duplicates() {
        let ok = TitledList::try_from(vec![pod("A"), pod("B")]);
        assert!(ok.is_ok());

        let err = TitledList::try_from(vec![pod("A"), pod("A")]).unwrap_err();
        assert_eq!(err.title, "A");
    }
}
