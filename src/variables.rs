use std::collections::BTreeMap;
use std::collections::btree_map;

/// Run-wide mapping from variable name to its last assigned value.
///
/// Names iterate in ascending order. Bindings are overwritten but
/// never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    values: BTreeMap<String, i64>,
}

impl VariableTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Add a binding, builder style.
    #[must_use]
    pub fn with(mut self, name: &str, value: i64) -> Self {
        self.bind(name, value);
        self
    }

    /// Look up the current value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Bind `name` to `value`, returning the value it replaced.
    pub fn bind(&mut self, name: &str, value: i64) -> Option<i64> {
        self.values.insert(name.to_string(), value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate bindings in ascending name order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.values.iter(),
        }
    }
}

/// Iterator over `(name, value)` pairs of a [`VariableTable`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, i64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), *value))
    }
}

impl<'a> IntoIterator for &'a VariableTable {
    type Item = (&'a str, i64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
