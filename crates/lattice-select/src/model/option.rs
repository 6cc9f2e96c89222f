//! Option declarations and registered options.

use serde::{Deserialize, Serialize};

/// A declared option, as written by the widget's author.
///
/// Declarations are turned into [`SelectOption`]s by
/// [`OptionRegistry::rebuild`](super::OptionRegistry::rebuild).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionDecl {
    /// Display text.
    pub label: String,
    /// Semantic value; the label is used when absent.
    pub value: Option<String>,
    /// Optional longer description for the active option.
    pub description: Option<String>,
    /// Excludes the option from selection and keyboard traversal.
    pub disabled: bool,
    /// Marks the option as pre-selected.
    pub selected: bool,
}

impl OptionDecl {
    /// Declare an option with just a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the value using builder pattern.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the description using builder pattern.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the disabled flag using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the pre-selected flag using builder pattern.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl From<&str> for OptionDecl {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for OptionDecl {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// One registered, selectable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    absolute_index: usize,
    label: String,
    value: String,
    description: Option<String>,
    disabled: bool,
}

impl SelectOption {
    pub(crate) fn from_decl(absolute_index: usize, decl: OptionDecl) -> Self {
        let value = decl.value.unwrap_or_else(|| decl.label.clone());
        Self {
            absolute_index,
            label: decl.label,
            value,
            description: decl.description,
            disabled: decl.disabled,
        }
    }

    /// Position in the full, unfiltered registry.
    pub fn absolute_index(&self) -> usize {
        self.absolute_index
    }

    /// Display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value reported when this option is committed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the option is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}
