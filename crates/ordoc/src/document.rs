//! The ordered document type.
//!
//! A [`Document`] is the container the writer assembles: a mapping from
//! field names to [`Value`]s that preserves the order in which names were
//! first inserted.

use std::fmt;

use indexmap::IndexMap;

use crate::value::{Value, write_escaped_string};

/// An insertion-ordered mapping from field names to values.
///
/// Field order is part of a document's identity: equality compares entries
/// in order, so two documents holding the same fields in different orders
/// are not equal. Re-inserting an existing name replaces its value without
/// moving the entry.
///
/// # Examples
///
/// ```
/// use ordoc::Document;
///
/// let mut doc = Document::new();
/// doc.insert("a", 1);
/// doc.insert("b", 2);
/// doc.insert("a", 10); // replaced in place, order unchanged
///
/// let names: Vec<_> = doc.keys().collect();
/// assert_eq!(names, ["a", "b"]);
/// assert_eq!(doc["a"], ordoc::Value::Int32(10));
/// ```
#[derive(Clone, Default)]
pub struct Document(IndexMap<String, Value>);

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inserts a field, returning the previous value if the name was present.
    ///
    /// A new name is appended at the end; an existing name keeps its
    /// position and only its value is replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns a reference to the value under `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns a mutable reference to the value under `name`, if present.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.0.get_mut(name)
    }

    /// Returns `true` if the document contains `name`.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes a field and returns its value, if the name was present.
    ///
    /// The remaining fields keep their relative order.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    /// Returns an iterator over `(name, value)` pairs in field order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Returns an iterator over field names in order.
    pub fn keys(&self) -> Keys<'_> {
        Keys(self.0.keys())
    }

    /// Returns an iterator over values in field order.
    pub fn values(&self) -> Values<'_> {
        Values(self.0.values())
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            f.write_str("\"")?;
            write_escaped_string(name, f)?;
            write!(f, "\":{value}")?;
        }
        f.write_str("}")
    }
}

impl std::ops::Index<&str> for Document {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `name` is not present in the document.
    fn index(&self, name: &str) -> &Value {
        self.get(name).expect("no field with that name")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (name, value) in iter {
            doc.insert(name, value);
        }
        doc
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Document {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// Iterator over `(&str, &Value)` pairs in field order.
pub struct Iter<'a>(indexmap::map::Iter<'a, String, Value>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Iterator over field names in order.
pub struct Keys<'a>(indexmap::map::Keys<'a, String, Value>);

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

/// Iterator over values in field order.
pub struct Values<'a>(indexmap::map::Values<'a, String, Value>);

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}

/// Iterator over owned `(String, Value)` pairs in field order.
pub struct IntoIter(indexmap::map::IntoIter<String, Value>);

impl Iterator for IntoIter {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_iter())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
