//! Lattice Select - single-choice select and combobox widget state machine.
//!
//! The crate models everything a select widget does between receiving an
//! input and painting: which options exist, which ones the filter text lets
//! through, which option is committed and which one is merely highlighted,
//! whether the dropdown is open, and where the option list is scrolled.
//! Rendering is left to the embedding toolkit.
//!
//! # Example
//!
//! ```
//! use lattice_select::{Key, SelectConfig, SelectInput, SingleSelect};
//!
//! let mut combo = SingleSelect::from_config(SelectConfig::new().with_combobox(true)).unwrap();
//! combo.set_options(["Antigua and Barbuda", "Argentina", "Armenia", "Australia", "Austria"]);
//!
//! combo.dispatch(SelectInput::FilterText("au".into()));
//! assert!(combo.is_expanded());
//! assert_eq!(combo.filtered_view().len(), 3);
//!
//! combo.dispatch(SelectInput::key(Key::ArrowDown));
//! combo.dispatch(SelectInput::key(Key::Enter));
//! assert_eq!(combo.value(), "Australia");
//! assert!(!combo.is_expanded());
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod prelude;
pub mod select;

pub use config::{
    DEFAULT_OPTION_HEIGHT, DEFAULT_VISIBLE_OPTIONS, SelectConfig, SelectDecl, SelectMode,
};
pub use error::{Result, SelectError};
pub use input::{Key, KeyPressEvent, KeyboardModifiers, PointerTarget, SelectInput};
pub use model::{
    FilterEngine, FilterMethod, FilteredEntry, FilteredView, OptionDecl, OptionRegistry,
    SelectOption,
};
pub use select::{
    ChangeEvent, CloseReason, CommitOutcome, Direction, DropdownState, Edge, Emission,
    ScrollMetrics, SingleSelect,
};

pub use lattice_select_core::{ConnectionId, Poster, Signal};
