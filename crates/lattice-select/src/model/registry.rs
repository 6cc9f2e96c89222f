//! Ordered registry of declared options.

use lattice_select_core::logging::targets;

use super::option::{OptionDecl, SelectOption};

/// The ordered list of options a widget can select from.
///
/// The registry is the single source of truth for which options exist and
/// which one is committed after a rebuild. It is replaced wholesale whenever
/// the declared set changes; options are never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRegistry {
    options: Vec<SelectOption>,
}

impl OptionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every option with the given declarations.
    ///
    /// Absolute indices follow declaration order. Returns the index of the
    /// last option marked pre-selected, which the caller commits without
    /// notification; `None` when nothing is marked.
    pub fn rebuild<I>(&mut self, declared: I) -> Option<usize>
    where
        I: IntoIterator,
        I::Item: Into<OptionDecl>,
    {
        let mut preselected = None;
        self.options = declared
            .into_iter()
            .enumerate()
            .map(|(index, decl)| {
                let decl = decl.into();
                if decl.selected {
                    preselected = Some(index);
                }
                SelectOption::from_decl(index, decl)
            })
            .collect();

        tracing::debug!(
            target: targets::REGISTRY,
            count = self.options.len(),
            ?preselected,
            "option registry rebuilt"
        );
        preselected
    }

    /// Get the option at an absolute index.
    pub fn get(&self, absolute_index: usize) -> Option<&SelectOption> {
        self.options.get(absolute_index)
    }

    /// Number of registered options.
    pub fn count(&self) -> usize {
        self.options.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over all options in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }

    /// Whether the index names an existing, enabled option.
    pub fn is_selectable(&self, absolute_index: usize) -> bool {
        self.get(absolute_index).is_some_and(|option| !option.is_disabled())
    }

    /// First enabled option.
    pub fn first_enabled(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| !option.is_disabled())
    }

    /// Nearest enabled option after `absolute_index`.
    pub fn next_enabled_after(&self, absolute_index: usize) -> Option<usize> {
        self.options
            .iter()
            .skip(absolute_index + 1)
            .find(|option| !option.is_disabled())
            .map(SelectOption::absolute_index)
    }

    /// Nearest enabled option before `absolute_index`.
    pub fn previous_enabled_before(&self, absolute_index: usize) -> Option<usize> {
        let end = absolute_index.min(self.options.len());
        self.options[..end]
            .iter()
            .rev()
            .find(|option| !option.is_disabled())
            .map(SelectOption::absolute_index)
    }

    /// First enabled option carrying the given value.
    pub fn find_value(&self, value: &str) -> Option<usize> {
        self.options
            .iter()
            .find(|option| !option.is_disabled() && option.value() == value)
            .map(SelectOption::absolute_index)
    }
}

impl<'a> IntoIterator for &'a OptionRegistry {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
