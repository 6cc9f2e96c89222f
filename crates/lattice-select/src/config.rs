//! Select widget configuration.
//!
//! [`SelectConfig`] carries the mode flag, the filter method, and the list
//! metrics the scroll synchronizer needs. [`SelectDecl`] bundles a config with
//! its option declarations so a whole widget can be described in TOML or JSON:
//!
//! ```
//! use lattice_select::SelectDecl;
//!
//! let decl = SelectDecl::from_toml_str(r#"
//!     [config]
//!     combobox = true
//!     filter = "starts-with"
//!
//!     [[options]]
//!     label = "Lorem"
//!
//!     [[options]]
//!     label = "Ipsum"
//!     selected = true
//! "#).unwrap();
//!
//! assert!(decl.config.combobox);
//! assert_eq!(decl.options.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectError};
use crate::model::{FilterMethod, OptionDecl};

/// Default height of one option row.
pub const DEFAULT_OPTION_HEIGHT: f32 = 19.0;

/// Default number of rows the dropdown shows before it scrolls.
pub const DEFAULT_VISIBLE_OPTIONS: usize = 10;

/// Interaction mode of a select widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Closed face that cycles through the option list.
    #[default]
    Select,
    /// Free-text input that filters the option list.
    Combobox,
}

/// Configuration for a [`crate::SingleSelect`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Whether the widget runs in combobox mode.
    pub combobox: bool,
    /// How filter text is matched against option labels.
    pub filter: FilterMethod,
    /// Height of one option row in the dropdown.
    pub option_height: f32,
    /// Maximum number of rows visible at once.
    pub visible_options: usize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            combobox: false,
            filter: FilterMethod::default(),
            option_height: DEFAULT_OPTION_HEIGHT,
            visible_options: DEFAULT_VISIBLE_OPTIONS,
        }
    }
}

impl SelectConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set combobox mode using builder pattern.
    pub fn with_combobox(mut self, combobox: bool) -> Self {
        self.combobox = combobox;
        self
    }

    /// Set the filter method using builder pattern.
    pub fn with_filter(mut self, filter: FilterMethod) -> Self {
        self.filter = filter;
        self
    }

    /// Set the option row height using builder pattern.
    pub fn with_option_height(mut self, height: f32) -> Self {
        self.option_height = height;
        self
    }

    /// Set the visible row count using builder pattern.
    pub fn with_visible_options(mut self, count: usize) -> Self {
        self.visible_options = count;
        self
    }

    /// The interaction mode selected by this config.
    pub fn mode(&self) -> SelectMode {
        if self.combobox {
            SelectMode::Combobox
        } else {
            SelectMode::Select
        }
    }

    /// Check that the metrics are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.option_height.is_finite() || self.option_height <= 0.0 {
            return Err(SelectError::invalid_config(
                "option_height",
                format!("expected a positive finite number, got {}", self.option_height),
            ));
        }
        if self.visible_options == 0 {
            return Err(SelectError::invalid_config(
                "visible_options",
                "at least one row must be visible",
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config from JSON.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}

/// A complete widget declaration: configuration plus declared options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectDecl {
    /// Widget configuration.
    pub config: SelectConfig,
    /// Declared options, in order.
    pub options: Vec<OptionDecl>,
}

impl SelectDecl {
    /// Parse and validate a declaration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let decl: Self = toml::from_str(source)?;
        decl.config.validate()?;
        Ok(decl)
    }

    /// Parse and validate a declaration from JSON.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let decl: Self = serde_json::from_str(source)?;
        decl.config.validate()?;
        Ok(decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SelectConfig::default();
        assert!(!config.combobox);
        assert_eq!(config.filter, FilterMethod::Fuzzy);
        assert_eq!(config.option_height, DEFAULT_OPTION_HEIGHT);
        assert_eq!(config.visible_options, DEFAULT_VISIBLE_OPTIONS);
        assert_eq!(config.mode(), SelectMode::Select);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SelectConfig::new()
            .with_combobox(true)
            .with_filter(FilterMethod::StartsWithPerTerm)
            .with_option_height(22.0)
            .with_visible_options(5);

        assert_eq!(config.mode(), SelectMode::Combobox);
        assert_eq!(config.filter, FilterMethod::StartsWithPerTerm);
        assert_eq!(config.option_height, 22.0);
        assert_eq!(config.visible_options, 5);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SelectConfig::from_toml_str("combobox = true").unwrap();
        assert!(config.combobox);
        assert_eq!(config.visible_options, DEFAULT_VISIBLE_OPTIONS);
    }

    #[test]
    fn test_invalid_metrics_rejected() {
        let err = SelectConfig::from_toml_str("option_height = 0.0").unwrap_err();
        assert!(matches!(
            err,
            SelectError::InvalidConfig {
                field: "option_height",
                ..
            }
        ));

        let err = SelectConfig::from_json_str(r#"{"visible_options": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            SelectError::InvalidConfig {
                field: "visible_options",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_sources() {
        assert!(matches!(
            SelectConfig::from_toml_str("combobox = "),
            Err(SelectError::ParseToml(_))
        ));
        assert!(matches!(
            SelectDecl::from_json_str("{"),
            Err(SelectError::ParseJson(_))
        ));
    }

    #[test]
    fn test_decl_from_json() {
        let decl = SelectDecl::from_json_str(
            r#"{
                "options": [
                    {"label": "Lorem"},
                    {"label": "Ipsum", "value": "ipsum", "disabled": true}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(decl.config, SelectConfig::default());
        assert_eq!(decl.options[1].value.as_deref(), Some("ipsum"));
        assert!(decl.options[1].disabled);
    }
}
