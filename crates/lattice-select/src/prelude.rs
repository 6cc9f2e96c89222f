//! Prelude module for Lattice Select.
//!
//! ```ignore
//! use lattice_select::prelude::*;
//! ```

pub use crate::config::{SelectConfig, SelectDecl};
pub use crate::input::{Key, KeyPressEvent, PointerTarget, SelectInput};
pub use crate::model::{FilterMethod, OptionDecl};
pub use crate::select::{ChangeEvent, DropdownState, Emission, SingleSelect};
pub use lattice_select_core::Signal;
