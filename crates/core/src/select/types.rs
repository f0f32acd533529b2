//! Type definitions for the selection widget.
//!
//! Options carry a caller-supplied value that the widget only compares for
//! uniqueness, so any `Eq + Hash` type works. Integers are the default.

use std::collections::HashSet;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

use crate::error::{Error, Result};

/// One entry of a selection list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption<V = i64> {
    pub value: V,
    pub label: String,
}

impl<V> SelectOption<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl<V> Display for SelectOption<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Ordered, non-empty list of options whose values are pairwise distinct.
///
/// The order given at construction is the display and navigation order. The
/// set cannot be changed once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSet<V = i64> {
    options: Vec<SelectOption<V>>,
}

impl<V: Eq + Hash + Debug> OptionSet<V> {
    /// Validates and wraps a list of options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOptions`] for an empty list and
    /// [`Error::DuplicateOptionValue`] when two options share a value.
    pub fn build(options: Vec<SelectOption<V>>) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::EmptyOptions);
        }

        let mut values = HashSet::new();
        for option in &options {
            if !values.insert(&option.value) {
                return Err(Error::DuplicateOptionValue(format!("{:?}", option.value)));
            }
        }

        Ok(Self { options })
    }
}

#[allow(clippy::len_without_is_empty)] // never empty once built
impl<V> OptionSet<V> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SelectOption<V>> {
        self.options.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SelectOption<V>] {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption<V>> {
        self.options.iter()
    }
}

impl<'a, V> IntoIterator for &'a OptionSet<V> {
    type Item = &'a SelectOption<V>;
    type IntoIter = std::slice::Iter<'a, SelectOption<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How a selection session ended, when it did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<V = i64> {
    Selected(SelectOption<V>),
    /// The user pressed Ctrl+C.
    Cancelled,
}
