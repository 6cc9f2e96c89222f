//! Input vocabulary understood by the select widgets.
//!
//! The surrounding layer translates platform events into [`SelectInput`]s and
//! feeds them to [`crate::SingleSelect::dispatch`]. Each input is handled
//! synchronously and completely before the next one is looked at.

/// Keys the select widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Space,
    Escape,
    Tab,
    /// A printable character.
    Character(char),
    /// Any other key.
    Unknown,
}

impl Key {
    /// Map a DOM-style key name (`"ArrowDown"`, `" "`, `"a"`) to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Enter" => Key::Enter,
            " " | "Space" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if !ch.is_control() => Key::Character(ch),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardModifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Control key is held.
    pub control: bool,
    /// Alt/Option key is held.
    pub alt: bool,
    /// Meta/Command/Windows key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Only Alt held.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };
}

/// Key press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a key press without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// Set modifiers using builder pattern.
    pub fn with_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl From<Key> for KeyPressEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// What a primary click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The closed face (select face, or the combobox toggle button).
    Face,
    /// A listed option, identified by its absolute index.
    Option(usize),
    /// Anywhere outside the widget.
    Outside,
}

/// One external input event.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectInput {
    /// A key was pressed while the widget had focus.
    KeyPress(KeyPressEvent),
    /// A primary click.
    Click(PointerTarget),
    /// The pointer moved over a listed option (absolute index).
    Hover(usize),
    /// The combobox input text changed to the given value.
    FilterText(String),
    /// Wheel rotation; positive `delta_y` scrolls up.
    Wheel { delta_y: f32 },
    /// The widget lost focus.
    FocusOut,
    /// Programmatic selection by absolute index; `-1` clears it.
    Select(i32),
}

impl SelectInput {
    /// A key press without modifiers.
    pub fn key(key: Key) -> Self {
        SelectInput::KeyPress(KeyPressEvent::new(key))
    }
}

impl From<KeyPressEvent> for SelectInput {
    fn from(event: KeyPressEvent) -> Self {
        SelectInput::KeyPress(event)
    }
}

impl From<PointerTarget> for SelectInput {
    fn from(target: PointerTarget) -> Self {
        SelectInput::Click(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("a"), Key::Character('a'));
        assert_eq!(Key::from_name("F13"), Key::Unknown);
        assert_eq!(Key::from_name(""), Key::Unknown);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            SelectInput::from(KeyPressEvent::new(Key::Enter)),
            SelectInput::key(Key::Enter)
        );
        assert_eq!(
            SelectInput::from(PointerTarget::Face),
            SelectInput::Click(PointerTarget::Face)
        );
        let alt_down = KeyPressEvent::new(Key::ArrowDown).with_modifiers(KeyboardModifiers::ALT);
        assert!(alt_down.modifiers.alt);
    }
}
