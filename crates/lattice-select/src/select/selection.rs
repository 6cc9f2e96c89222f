//! Committed selection and browsing highlight.

use crate::model::{FilteredView, OptionRegistry};

/// Direction of a highlight or selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// End of the filtered view to jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    First,
    Last,
}

/// Result of a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The target was absent or disabled; nothing changed.
    Rejected,
    /// The target was already the committed option.
    Unchanged,
    /// The committed option changed.
    Changed,
}

impl CommitOutcome {
    /// Whether the committed option changed.
    pub fn is_changed(self) -> bool {
        self == CommitOutcome::Changed
    }
}

/// The committed `selected` index and the browsing `active` index.
///
/// Both are absolute registry indices. `active` is only meaningful while the
/// dropdown is open and always names a row of the current filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
    active: Option<usize>,
}

impl SelectionState {
    /// Create a state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed option.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted option.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Install the selection derived from a registry rebuild.
    ///
    /// A pre-selected option is honored even when it is disabled.
    pub(crate) fn restore(&mut self, selected: Option<usize>) {
        self.selected = selected;
        self.active = None;
    }

    /// Commit the option at `index`, or clear the selection with `None`.
    pub fn commit(&mut self, registry: &OptionRegistry, index: Option<usize>) -> CommitOutcome {
        if let Some(index) = index
            && !registry.is_selectable(index)
        {
            return CommitOutcome::Rejected;
        }
        if self.selected == index {
            return CommitOutcome::Unchanged;
        }
        self.selected = index;
        CommitOutcome::Changed
    }

    /// Step the committed option over the whole registry (closed dropdown).
    ///
    /// Disabled options are skipped and the ends clamp. Stepping backwards
    /// with nothing selected does nothing; stepping forwards picks the first
    /// enabled option.
    pub fn step_selected(&mut self, registry: &OptionRegistry, direction: Direction) -> CommitOutcome {
        let target = match (self.selected, direction) {
            (None, Direction::Next) => registry.first_enabled(),
            (None, Direction::Previous) => None,
            (Some(current), Direction::Next) => registry.next_enabled_after(current),
            (Some(current), Direction::Previous) => registry.previous_enabled_before(current),
        };

        match target {
            Some(target) => {
                let outcome = self.commit(registry, Some(target));
                self.active = self.selected;
                outcome
            }
            None => CommitOutcome::Unchanged,
        }
    }

    /// Move the highlight `rows` steps within `view` (open dropdown).
    ///
    /// Clamps at both ends. With no highlight, `Next` lands on the first row
    /// and `Previous` on the last. Returns whether the highlight moved.
    pub fn step_active(&mut self, view: &FilteredView, direction: Direction, rows: usize) -> bool {
        let Some(last) = view.len().checked_sub(1) else {
            return false;
        };

        let position = match (self.active.and_then(|a| view.to_filtered(a)), direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => last,
            (Some(pos), Direction::Next) => pos.saturating_add(rows).min(last),
            (Some(pos), Direction::Previous) => pos.saturating_sub(rows),
        };
        self.set_active_unchecked(view.to_absolute(position))
    }

    /// Move the highlight to the first or last row of `view`.
    pub fn jump_active(&mut self, view: &FilteredView, edge: Edge) -> bool {
        let target = match edge {
            Edge::First => view.first(),
            Edge::Last => view.last(),
        };
        match target {
            Some(_) => self.set_active_unchecked(target),
            None => false,
        }
    }

    /// Highlight `index` if it is a row of `view`.
    pub fn set_active(&mut self, view: &FilteredView, index: usize) -> bool {
        if !view.contains(index) {
            return false;
        }
        self.set_active_unchecked(Some(index))
    }

    /// Initialize the highlight on entry to the open state.
    ///
    /// Uses the committed option when it is visible, else the first row.
    pub fn reset_active(&mut self, view: &FilteredView) {
        self.active = self
            .selected
            .filter(|&selected| view.contains(selected))
            .or_else(|| view.first());
    }

    /// Re-establish the highlight after `view` was recomputed.
    ///
    /// A highlight that is no longer visible moves to the first row, or to
    /// none when the view is empty.
    pub fn heal_active(&mut self, view: &FilteredView) {
        if self.active.is_some_and(|active| view.contains(active)) {
            return;
        }
        self.active = view.first();
    }

    /// Drop the highlight.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Commit the highlighted option.
    ///
    /// Returns `None` when there is nothing visible to confirm.
    pub fn confirm_active(
        &mut self,
        registry: &OptionRegistry,
        view: &FilteredView,
    ) -> Option<CommitOutcome> {
        let active = self.active.filter(|&active| view.contains(active))?;
        Some(self.commit(registry, Some(active)))
    }

    fn set_active_unchecked(&mut self, index: Option<usize>) -> bool {
        if self.active == index {
            return false;
        }
        self.active = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FilterEngine, FilterMethod, OptionDecl};

    fn registry(decls: Vec<OptionDecl>) -> OptionRegistry {
        let mut registry = OptionRegistry::new();
        registry.rebuild(decls);
        registry
    }

    fn plain(labels: &[&str]) -> OptionRegistry {
        registry(labels.iter().copied().map(OptionDecl::new).collect())
    }

    #[test]
    fn test_commit_outcomes() {
        let registry = registry(vec![
            OptionDecl::new("A"),
            OptionDecl::new("B").with_disabled(true),
        ]);
        let mut state = SelectionState::new();

        assert_eq!(state.commit(&registry, Some(0)), CommitOutcome::Changed);
        assert_eq!(state.commit(&registry, Some(0)), CommitOutcome::Unchanged);
        assert_eq!(state.commit(&registry, Some(1)), CommitOutcome::Rejected);
        assert_eq!(state.commit(&registry, Some(7)), CommitOutcome::Rejected);
        assert_eq!(state.selected(), Some(0));

        assert_eq!(state.commit(&registry, None), CommitOutcome::Changed);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_step_selected_from_nothing() {
        let registry = plain(&["Lorem", "Ipsum", "Dolor"]);
        let mut state = SelectionState::new();

        assert_eq!(
            state.step_selected(&registry, Direction::Previous),
            CommitOutcome::Unchanged
        );
        assert_eq!(state.selected(), None);

        assert_eq!(
            state.step_selected(&registry, Direction::Next),
            CommitOutcome::Changed
        );
        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.active(), Some(0));
    }

    #[test]
    fn test_step_selected_clamps_and_skips_disabled() {
        let registry = registry(vec![
            OptionDecl::new("A"),
            OptionDecl::new("B").with_disabled(true),
            OptionDecl::new("C"),
        ]);
        let mut state = SelectionState::new();
        state.commit(&registry, Some(0));

        assert!(state.step_selected(&registry, Direction::Next).is_changed());
        assert_eq!(state.selected(), Some(2));
        assert_eq!(
            state.step_selected(&registry, Direction::Next),
            CommitOutcome::Unchanged
        );
        assert_eq!(state.selected(), Some(2));

        assert!(state.step_selected(&registry, Direction::Previous).is_changed());
        assert_eq!(state.selected(), Some(0));
        assert_eq!(
            state.step_selected(&registry, Direction::Previous),
            CommitOutcome::Unchanged
        );
    }

    #[test]
    fn test_step_active_clamps_within_view() {
        let registry = plain(&["A", "B", "C", "D"]);
        let view = FilterEngine::default().apply(&registry, "");
        let mut state = SelectionState::new();

        assert!(state.step_active(&view, Direction::Next, 1));
        assert_eq!(state.active(), Some(0));
        assert!(state.step_active(&view, Direction::Next, 10));
        assert_eq!(state.active(), Some(3));
        assert!(!state.step_active(&view, Direction::Next, 1));
        assert!(state.step_active(&view, Direction::Previous, 2));
        assert_eq!(state.active(), Some(1));
        assert!(state.step_active(&view, Direction::Previous, 5));
        assert_eq!(state.active(), Some(0));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_step_active_on_empty_view() {
        let registry = plain(&["A"]);
        let view = FilterEngine::default().apply(&registry, "zz");
        let mut state = SelectionState::new();

        assert!(!state.step_active(&view, Direction::Next, 1));
        assert!(!state.jump_active(&view, Edge::Last));
        assert_eq!(state.confirm_active(&registry, &view), None);
    }

    #[test]
    fn test_reset_prefers_visible_selection() {
        let registry = plain(&["Argentina", "Austria", "Armenia"]);
        let engine = FilterEngine::new(FilterMethod::Contains);
        let mut state = SelectionState::new();
        state.commit(&registry, Some(1));

        state.reset_active(&engine.apply(&registry, ""));
        assert_eq!(state.active(), Some(1));

        state.reset_active(&engine.apply(&registry, "ar"));
        assert_eq!(state.active(), Some(0));
    }

    #[test]
    fn test_heal_active() {
        let registry = plain(&["Argentina", "Austria", "Armenia"]);
        let engine = FilterEngine::new(FilterMethod::Contains);
        let mut state = SelectionState::new();
        assert!(state.set_active(&engine.apply(&registry, ""), 2));

        state.heal_active(&engine.apply(&registry, "arm"));
        assert_eq!(state.active(), Some(2));

        state.heal_active(&engine.apply(&registry, "aus"));
        assert_eq!(state.active(), Some(1));

        state.heal_active(&engine.apply(&registry, "zz"));
        assert_eq!(state.active(), None);
    }

    #[test]
    fn test_set_active_rejects_hidden_rows() {
        let registry = registry(vec![
            OptionDecl::new("A"),
            OptionDecl::new("B").with_disabled(true),
        ]);
        let view = FilterEngine::default().apply(&registry, "");
        let mut state = SelectionState::new();

        assert!(!state.set_active(&view, 1));
        assert!(!state.set_active(&view, 5));
        assert!(state.set_active(&view, 0));
    }

    #[test]
    fn test_confirm_commits_active() {
        let registry = plain(&["A", "B", "C"]);
        let view = FilterEngine::default().apply(&registry, "");
        let mut state = SelectionState::new();

        assert_eq!(state.confirm_active(&registry, &view), None);
        state.jump_active(&view, Edge::Last);
        assert_eq!(
            state.confirm_active(&registry, &view),
            Some(CommitOutcome::Changed)
        );
        assert_eq!(state.selected(), Some(2));
        assert_eq!(
            state.confirm_active(&registry, &view),
            Some(CommitOutcome::Unchanged)
        );
    }
}
