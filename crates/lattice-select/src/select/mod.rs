//! The select widget and the state machine pieces it is built from.

mod dropdown;
mod events;
mod scroll;
mod selection;
mod single_select;

pub use dropdown::{Action, CloseReason, DropdownController, DropdownState};
pub use events::{ChangeEvent, Emission};
pub use scroll::{ScrollMetrics, ScrollSync};
pub use selection::{CommitOutcome, Direction, Edge, SelectionState};
pub use single_select::SingleSelect;
