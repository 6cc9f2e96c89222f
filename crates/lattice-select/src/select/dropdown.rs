//! Open/closed dropdown controller.
//!
//! The controller owns the dropdown state and decides what an input means in
//! that state. It never touches selection or the filter itself; the widget
//! applies the returned [`Action`] and then asks the controller to open or
//! close.

use crate::config::SelectMode;
use crate::input::{Key, KeyPressEvent, PointerTarget, SelectInput};

use super::selection::{Direction, Edge};

/// Whether the option list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Why the dropdown closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Enter confirmed the highlighted option.
    Confirmed,
    /// An option was clicked.
    OptionClicked,
    /// Escape discarded the browse state.
    Escape,
    /// Focus moved away.
    FocusLoss,
    /// A click landed outside the widget.
    OutsideClick,
    /// The face was activated again while open.
    Toggle,
    /// Closed by the embedding code.
    Programmatic,
}

/// What the widget should do in response to one input.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open the dropdown.
    Open,
    /// Close without committing.
    Dismiss(CloseReason),
    /// Commit the highlighted option and close.
    Confirm,
    /// Commit the clicked option (absolute index) and close.
    CommitOption(usize),
    /// Step the committed option over the registry.
    StepSelected(Direction),
    /// Move the highlight one row.
    StepActive(Direction),
    /// Move the highlight one page.
    PageActive(Direction),
    /// Move the highlight to an end of the list.
    JumpActive(Edge),
    /// Highlight the hovered option (absolute index).
    Hover(usize),
    /// Replace the filter text.
    Filter(String),
    /// Scroll the open list by a pixel delta.
    ScrollBy(f32),
    /// Programmatic selection; `-1` clears.
    Select(i32),
    /// Nothing to do.
    Ignore,
}

/// Tracks whether the dropdown is open and maps inputs to [`Action`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownController {
    state: DropdownState,
}

impl DropdownController {
    /// Create a closed controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> DropdownState {
        self.state
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    /// Enter the open state. Returns false if already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = DropdownState::Open;
        true
    }

    /// Enter the closed state. Returns false if already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = DropdownState::Closed;
        true
    }

    /// Decide what `input` means in the current state.
    pub fn action_for(&self, input: &SelectInput, mode: SelectMode) -> Action {
        match (self.state, input) {
            (_, SelectInput::Select(index)) => Action::Select(*index),
            (DropdownState::Closed, input) => Self::closed_action(input, mode),
            (DropdownState::Open, input) => Self::open_action(input, mode),
        }
    }

    fn closed_action(input: &SelectInput, mode: SelectMode) -> Action {
        match input {
            SelectInput::KeyPress(event) => match event.key {
                Key::ArrowDown if event.modifiers.alt => Action::Open,
                Key::ArrowDown => Action::StepSelected(Direction::Next),
                Key::ArrowUp => Action::StepSelected(Direction::Previous),
                Key::Enter => Action::Open,
                Key::Space if mode == SelectMode::Select => Action::Open,
                _ => Action::Ignore,
            },
            SelectInput::Click(PointerTarget::Face) => Action::Open,
            SelectInput::FilterText(text) if mode == SelectMode::Combobox => {
                Action::Filter(text.clone())
            }
            SelectInput::Wheel { delta_y } if mode == SelectMode::Select => {
                wheel_step(*delta_y).map_or(Action::Ignore, Action::StepSelected)
            }
            _ => Action::Ignore,
        }
    }

    fn open_action(input: &SelectInput, mode: SelectMode) -> Action {
        match input {
            SelectInput::KeyPress(event) => Self::open_key_action(event, mode),
            SelectInput::Click(PointerTarget::Face) => Action::Dismiss(CloseReason::Toggle),
            SelectInput::Click(PointerTarget::Option(index)) => Action::CommitOption(*index),
            SelectInput::Click(PointerTarget::Outside) => {
                Action::Dismiss(CloseReason::OutsideClick)
            }
            SelectInput::Hover(index) => Action::Hover(*index),
            SelectInput::FilterText(text) if mode == SelectMode::Combobox => {
                Action::Filter(text.clone())
            }
            SelectInput::Wheel { delta_y } if *delta_y != 0.0 => Action::ScrollBy(-delta_y),
            SelectInput::FocusOut => Action::Dismiss(CloseReason::FocusLoss),
            _ => Action::Ignore,
        }
    }

    fn open_key_action(event: &KeyPressEvent, mode: SelectMode) -> Action {
        match event.key {
            Key::ArrowDown => Action::StepActive(Direction::Next),
            Key::ArrowUp => Action::StepActive(Direction::Previous),
            Key::PageDown => Action::PageActive(Direction::Next),
            Key::PageUp => Action::PageActive(Direction::Previous),
            Key::Home => Action::JumpActive(Edge::First),
            Key::End => Action::JumpActive(Edge::Last),
            Key::Enter => Action::Confirm,
            Key::Space if mode == SelectMode::Select => Action::Dismiss(CloseReason::Toggle),
            Key::Escape => Action::Dismiss(CloseReason::Escape),
            Key::Tab => Action::Dismiss(CloseReason::FocusLoss),
            _ => Action::Ignore,
        }
    }
}

/// Wheel rotation away from the user (positive delta) moves backwards.
fn wheel_step(delta_y: f32) -> Option<Direction> {
    if delta_y > 0.0 {
        Some(Direction::Previous)
    } else if delta_y < 0.0 {
        Some(Direction::Next)
    } else {
        None
    }
}
