//! Filter engine: derives the visible subset of the registry.
//!
//! A [`FilteredView`] is a pure function of the registry and the filter text.
//! It keeps a bidirectional row mapping between dense filtered positions and
//! absolute registry indices, the same shape a filtering proxy model keeps
//! between proxy rows and source rows.

use serde::{Deserialize, Serialize};

use lattice_select_core::logging::targets;

use super::registry::OptionRegistry;

/// How filter text is matched against option labels.
///
/// Every method is case-insensitive and treats empty filter text as matching
/// everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMethod {
    /// Every character of the filter text appears in the label, in order.
    #[default]
    Fuzzy,
    /// The label contains the filter text.
    Contains,
    /// The label starts with the filter text.
    StartsWith,
    /// Every whitespace-separated term starts some word of the label.
    StartsWithPerTerm,
}

impl FilterMethod {
    /// Whether `label` matches `pattern` under this method.
    pub fn matches(self, label: &str, pattern: &str) -> bool {
        if pattern.is_empty() {
            return true;
        }
        let label = label.to_lowercase();
        let pattern = pattern.to_lowercase();

        match self {
            FilterMethod::Fuzzy => {
                let mut haystack = label.chars();
                pattern
                    .chars()
                    .all(|needle| haystack.any(|ch| ch == needle))
            }
            FilterMethod::Contains => label.contains(&pattern),
            FilterMethod::StartsWith => label.starts_with(&pattern),
            FilterMethod::StartsWithPerTerm => pattern.split_whitespace().all(|term| {
                label
                    .split_whitespace()
                    .any(|word| word.starts_with(term))
            }),
        }
    }
}

/// One row of a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilteredEntry {
    /// Dense position within the view.
    pub filtered_index: usize,
    /// Position in the full registry.
    pub absolute_index: usize,
}

/// Ordered subset of the registry that matches the current filter text.
///
/// Filtered indices are dense and absolute indices strictly increase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    /// Filtered position to absolute index.
    filtered_to_absolute: Vec<usize>,
    /// Absolute index to filtered position (None if filtered out).
    absolute_to_filtered: Vec<Option<usize>>,
}

impl FilteredView {
    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.filtered_to_absolute.len()
    }

    /// Whether no option is visible.
    pub fn is_empty(&self) -> bool {
        self.filtered_to_absolute.is_empty()
    }

    /// Iterate over the `(filtered, absolute)` pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = FilteredEntry> + '_ {
        self.filtered_to_absolute
            .iter()
            .enumerate()
            .map(|(filtered_index, &absolute_index)| FilteredEntry {
                filtered_index,
                absolute_index,
            })
    }

    /// Absolute index of the row at `filtered_index`.
    pub fn to_absolute(&self, filtered_index: usize) -> Option<usize> {
        self.filtered_to_absolute.get(filtered_index).copied()
    }

    /// Filtered position of the option at `absolute_index`, if visible.
    pub fn to_filtered(&self, absolute_index: usize) -> Option<usize> {
        self.absolute_to_filtered
            .get(absolute_index)
            .copied()
            .flatten()
    }

    /// Whether the option at `absolute_index` is visible.
    pub fn contains(&self, absolute_index: usize) -> bool {
        self.to_filtered(absolute_index).is_some()
    }

    /// Absolute index of the first visible row.
    pub fn first(&self) -> Option<usize> {
        self.filtered_to_absolute.first().copied()
    }

    /// Absolute index of the last visible row.
    pub fn last(&self) -> Option<usize> {
        self.filtered_to_absolute.last().copied()
    }
}

/// Computes [`FilteredView`]s for a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterEngine {
    method: FilterMethod,
}

impl FilterEngine {
    /// Create an engine using the given match method.
    pub fn new(method: FilterMethod) -> Self {
        Self { method }
    }

    /// The match method in use.
    pub fn method(&self) -> FilterMethod {
        self.method
    }

    /// Change the match method. Views already computed are not touched.
    pub fn set_method(&mut self, method: FilterMethod) {
        self.method = method;
    }

    /// Derive the view of `registry` for `filter_text`.
    ///
    /// Disabled options never appear, whatever their label.
    pub fn apply(&self, registry: &OptionRegistry, filter_text: &str) -> FilteredView {
        let mut view = FilteredView {
            filtered_to_absolute: Vec::new(),
            absolute_to_filtered: vec![None; registry.count()],
        };

        for option in registry {
            if option.is_disabled() || !self.method.matches(option.label(), filter_text) {
                continue;
            }
            let absolute = option.absolute_index();
            view.absolute_to_filtered[absolute] = Some(view.filtered_to_absolute.len());
            view.filtered_to_absolute.push(absolute);
        }

        tracing::trace!(
            target: targets::FILTER,
            method = ?self.method,
            filter_text,
            visible = view.len(),
            total = registry.count(),
            "filtered view recomputed"
        );
        view
    }
}
