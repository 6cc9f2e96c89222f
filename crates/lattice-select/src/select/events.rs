//! Change notifications.

use crate::model::SelectOption;

/// Payload of the `changed` signal.
///
/// Carries the sentinel values `-1` and `""` when the selection was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangeEvent {
    /// Absolute index of the committed option, or `-1`.
    pub selected_index: i32,
    /// Value of the committed option, or empty.
    pub value: String,
}

impl ChangeEvent {
    /// The cleared-selection event.
    pub fn none() -> Self {
        Self {
            selected_index: -1,
            value: String::new(),
        }
    }

    /// Event describing `option` as the committed option.
    pub fn for_option(option: Option<&SelectOption>) -> Self {
        match option {
            Some(option) => Self {
                selected_index: index_to_i32(option.absolute_index()),
                value: option.value().to_owned(),
            },
            None => Self::none(),
        }
    }
}

/// Whether a programmatic commit notifies observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emission {
    /// Emit `changed` if the committed option changed.
    #[default]
    Notify,
    /// Commit silently.
    Suppressed,
}

pub(crate) fn index_to_i32(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
