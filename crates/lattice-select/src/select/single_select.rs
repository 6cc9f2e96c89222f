//! Single-choice select widget state machine.
//!
//! [`SingleSelect`] ties the option registry, filter engine, selection state,
//! dropdown controller and scroll synchronizer together. Every input runs
//! through the same pipeline before control returns to the caller:
//!
//! 1. the dropdown controller maps the input to an action,
//! 2. registry, filter and selection state are updated,
//! 3. the scroll offset is recomputed,
//! 4. the `expanded` flag is updated, notifying `expanded_changed`,
//! 5. `changed` is emitted if the committed option changed.
//!
//! Observers never see a half-updated widget. An observer that wants to drive
//! the widget again posts an input through [`SingleSelect::poster`]; posted
//! inputs run after the current one has finished.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use lattice_select::{Key, SelectInput, SingleSelect};
//!
//! let mut select = SingleSelect::with_options(["Lorem", "Ipsum", "Dolor"]);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! select.changed.connect(move |event| sink.lock().push(event.value.clone()));
//!
//! select.dispatch(SelectInput::key(Key::ArrowDown));
//! assert_eq!(select.value(), "Lorem");
//! assert_eq!(*seen.lock(), vec!["Lorem".to_string()]);
//! ```

use lattice_select_core::logging::{span_names, targets};
use lattice_select_core::{PostQueue, Poster, Property, Signal};

use crate::config::{SelectConfig, SelectDecl, SelectMode};
use crate::error::Result;
use crate::input::SelectInput;
use crate::model::{
    FilterEngine, FilterMethod, FilteredView, OptionDecl, OptionRegistry, SelectOption,
};

use super::dropdown::{Action, CloseReason, DropdownController, DropdownState};
use super::events::{ChangeEvent, Emission, index_to_i32};
use super::scroll::{ScrollMetrics, ScrollSync};
use super::selection::{CommitOutcome, SelectionState};

/// Bookkeeping for one pass through the input pipeline.
#[derive(Debug, Default)]
struct Pass {
    /// The input changed some state.
    handled: bool,
    /// The scroll offset must be recomputed.
    reveal: bool,
    /// `changed` must be emitted.
    notify: bool,
}

impl Pass {
    fn touched(&mut self, changed: bool) {
        self.handled |= changed;
        self.reveal |= changed;
    }

    fn committed(&mut self, outcome: CommitOutcome, emission: Emission) {
        if outcome.is_changed() {
            self.handled = true;
            self.notify |= emission == Emission::Notify;
        }
    }
}

/// A single-choice select, optionally in combobox mode.
pub struct SingleSelect {
    config: SelectConfig,
    registry: OptionRegistry,
    engine: FilterEngine,
    view: FilteredView,
    filter_text: String,
    selection: SelectionState,
    dropdown: DropdownController,
    scroll: ScrollSync,
    expanded: Property<bool>,
    posted: PostQueue<SelectInput>,

    /// Emitted once per input that changed the committed option.
    pub changed: Signal<ChangeEvent>,
}

impl SingleSelect {
    /// Create an empty select with default configuration.
    pub fn new() -> Self {
        Self::build(SelectConfig::default())
    }

    /// Create an empty select with the given configuration.
    ///
    /// Fails if the config does not pass [`SelectConfig::validate`].
    pub fn from_config(config: SelectConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SelectConfig) -> Self {
        Self {
            engine: FilterEngine::new(config.filter),
            config,
            registry: OptionRegistry::new(),
            view: FilteredView::default(),
            filter_text: String::new(),
            selection: SelectionState::new(),
            dropdown: DropdownController::new(),
            scroll: ScrollSync::new(),
            expanded: Property::new(false),
            posted: PostQueue::new(),
            changed: Signal::new(),
        }
    }

    /// Create a select from a full declaration.
    pub fn from_decl(decl: SelectDecl) -> Result<Self> {
        let mut select = Self::from_config(decl.config)?;
        select.set_options(decl.options);
        Ok(select)
    }

    /// Create a default select holding the given options.
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OptionDecl>,
    {
        let mut select = Self::new();
        select.set_options(options);
        select
    }

    /// Replace the option list.
    ///
    /// The committed option becomes the last one declared as pre-selected, or
    /// none. This does not emit `changed`.
    pub fn set_options<I>(&mut self, options: I)
    where
        I: IntoIterator,
        I::Item: Into<OptionDecl>,
    {
        let preselected = self.registry.rebuild(options);
        self.selection.restore(preselected);
        self.refilter();
        if self.dropdown.is_open() {
            self.selection.reset_active(&self.view);
        }
        self.sync_scroll();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The widget configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// The interaction mode.
    pub fn mode(&self) -> SelectMode {
        self.config.mode()
    }

    /// The registered options.
    pub fn options(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Absolute index of the committed option, or `-1`.
    pub fn selected_index(&self) -> i32 {
        self.selection.selected().map_or(-1, index_to_i32)
    }

    /// The committed option.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selection
            .selected()
            .and_then(|index| self.registry.get(index))
    }

    /// Value of the committed option, or empty.
    pub fn value(&self) -> &str {
        self.selected_option().map_or("", SelectOption::value)
    }

    /// Absolute index of the highlighted option.
    pub fn active_index(&self) -> Option<usize> {
        self.selection.active()
    }

    /// The highlighted option.
    pub fn active_option(&self) -> Option<&SelectOption> {
        self.selection
            .active()
            .and_then(|index| self.registry.get(index))
    }

    /// Current filter text. Always empty outside combobox mode.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// The options currently listed.
    pub fn filtered_view(&self) -> &FilteredView {
        &self.view
    }

    /// Whether the dropdown is open or closed.
    pub fn dropdown_state(&self) -> DropdownState {
        self.dropdown.state()
    }

    /// The externally visible expanded flag.
    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    /// Emitted when the dropdown opens (`true`) or closes (`false`).
    pub fn expanded_changed(&self) -> &Signal<bool> {
        self.expanded.changed()
    }

    /// Current scroll offset of the option list.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// Text the closed face or combobox input shows.
    ///
    /// An open combobox shows the filter text; otherwise the committed label.
    pub fn display_text(&self) -> &str {
        if self.mode() == SelectMode::Combobox && self.dropdown.is_open() {
            return &self.filter_text;
        }
        self.selected_option().map_or("", SelectOption::label)
    }

    /// Handle for posting inputs from inside signal handlers.
    pub fn poster(&self) -> Poster<SelectInput> {
        self.posted.poster()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Switch between select and combobox mode. Closes the dropdown.
    pub fn set_combobox(&mut self, combobox: bool) {
        if self.config.combobox == combobox {
            return;
        }
        let mut pass = Pass::default();
        self.close_dropdown(CloseReason::Programmatic, &mut pass);
        self.config.combobox = combobox;
        self.filter_text.clear();
        self.refilter();
        self.finish(pass);
        self.drain_posted();
    }

    /// The match method applied to filter text.
    pub fn filter_method(&self) -> FilterMethod {
        self.engine.method()
    }

    /// Change the filter method and re-filter the current text.
    ///
    /// An open dropdown keeps its highlight if the option is still listed.
    pub fn set_filter_method(&mut self, method: FilterMethod) {
        if self.engine.method() == method {
            return;
        }
        self.config.filter = method;
        self.engine.set_method(method);
        self.refilter();

        let mut pass = Pass::default();
        if self.dropdown.is_open() {
            self.selection.heal_active(&self.view);
            pass.touched(true);
        }
        self.finish(pass);
        self.drain_posted();
    }

    // =========================================================================
    // Programmatic selection
    // =========================================================================

    /// Commit an option by absolute index; `-1` clears the selection.
    ///
    /// Out-of-range and disabled indices are ignored. Returns whether the
    /// committed option changed.
    pub fn set_selected_index(&mut self, index: i32) -> bool {
        self.dispatch(SelectInput::Select(index))
    }

    /// Commit the first enabled option carrying `value`.
    ///
    /// Unknown values are ignored. Returns whether the committed option
    /// changed.
    pub fn set_value(&mut self, value: &str) -> bool {
        match self.registry.find_value(value) {
            Some(index) => self.commit_with(Some(index), Emission::Notify),
            None => {
                tracing::trace!(target: targets::SELECT, value, "set_value: no such value");
                false
            }
        }
    }

    /// Commit an option, or clear with `None`, choosing whether to notify.
    pub fn commit_with(&mut self, index: Option<usize>, emission: Emission) -> bool {
        let mut pass = Pass::default();
        let outcome = self.selection.commit(&self.registry, index);
        pass.committed(outcome, emission);
        let handled = self.finish(pass);
        self.drain_posted();
        handled
    }

    /// Open the dropdown.
    pub fn show_dropdown(&mut self) -> bool {
        let mut pass = Pass::default();
        self.open_dropdown(&mut pass);
        let handled = self.finish(pass);
        self.drain_posted();
        handled
    }

    /// Close the dropdown, discarding the highlight.
    pub fn hide_dropdown(&mut self) -> bool {
        let mut pass = Pass::default();
        self.close_dropdown(CloseReason::Programmatic, &mut pass);
        let handled = self.finish(pass);
        self.drain_posted();
        handled
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    /// Handle one input, then any inputs observers posted meanwhile.
    ///
    /// Returns whether the input itself changed any state.
    pub fn dispatch(&mut self, input: SelectInput) -> bool {
        let handled = self.process(input);
        self.drain_posted();
        handled
    }

    fn drain_posted(&mut self) {
        while let Some(input) = self.posted.pop() {
            self.process(input);
        }
    }

    fn process(&mut self, input: SelectInput) -> bool {
        let span = tracing::trace_span!(target: targets::SELECT, span_names::DISPATCH, ?input);
        let _entered = span.enter();

        let action = self.dropdown.action_for(&input, self.mode());
        tracing::trace!(target: targets::SELECT, ?action, "input mapped");

        let mut pass = Pass::default();
        self.apply(action, &mut pass);
        self.finish(pass)
    }

    fn apply(&mut self, action: Action, pass: &mut Pass) {
        match action {
            Action::Open => self.open_dropdown(pass),
            Action::Dismiss(reason) => self.close_dropdown(reason, pass),
            Action::Confirm => {
                match self.selection.confirm_active(&self.registry, &self.view) {
                    Some(outcome) => pass.committed(outcome, Emission::Notify),
                    None => {
                        tracing::trace!(target: targets::SELECT, "confirm with nothing highlighted");
                    }
                }
                self.close_dropdown(CloseReason::Confirmed, pass);
            }
            Action::CommitOption(index) => {
                if !self.view.contains(index) {
                    tracing::trace!(target: targets::SELECT, index, "click on unlisted option ignored");
                    return;
                }
                let outcome = self.selection.commit(&self.registry, Some(index));
                pass.committed(outcome, Emission::Notify);
                self.close_dropdown(CloseReason::OptionClicked, pass);
            }
            Action::StepSelected(direction) => {
                let outcome = self.selection.step_selected(&self.registry, direction);
                pass.committed(outcome, Emission::Notify);
            }
            Action::StepActive(direction) => {
                let moved = self.selection.step_active(&self.view, direction, 1);
                pass.touched(moved);
            }
            Action::PageActive(direction) => {
                let rows = self.config.visible_options.max(1);
                let moved = self.selection.step_active(&self.view, direction, rows);
                pass.touched(moved);
            }
            Action::JumpActive(edge) => {
                let moved = self.selection.jump_active(&self.view, edge);
                pass.touched(moved);
            }
            Action::Hover(index) => {
                pass.handled |= self.selection.set_active(&self.view, index);
            }
            Action::Filter(text) => self.apply_filter(text, pass),
            Action::ScrollBy(delta) => {
                let metrics = self.metrics();
                pass.handled |= self.scroll.scroll_by(delta, &metrics);
            }
            Action::Select(index) => {
                let target = if index < 0 {
                    None
                } else {
                    match usize::try_from(index) {
                        Ok(index) if index < self.registry.count() => Some(index),
                        _ => {
                            tracing::trace!(target: targets::SELECT, index, "select out of range ignored");
                            return;
                        }
                    }
                };
                let outcome = self.selection.commit(&self.registry, target);
                pass.committed(outcome, Emission::Notify);
            }
            Action::Ignore => {}
        }
    }

    fn apply_filter(&mut self, text: String, pass: &mut Pass) {
        let text_changed = self.filter_text != text;
        self.filter_text = text;
        self.refilter();

        if self.dropdown.is_open() {
            self.selection.heal_active(&self.view);
            pass.touched(text_changed);
        } else {
            pass.handled |= text_changed;
            self.open_dropdown(pass);
        }
    }

    fn open_dropdown(&mut self, pass: &mut Pass) {
        if !self.dropdown.open() {
            return;
        }
        self.refilter();
        self.selection.reset_active(&self.view);
        tracing::debug!(
            target: targets::SELECT,
            active = ?self.selection.active(),
            listed = self.view.len(),
            "dropdown opened"
        );
        pass.touched(true);
    }

    fn close_dropdown(&mut self, reason: CloseReason, pass: &mut Pass) {
        if !self.dropdown.close() {
            return;
        }
        self.selection.clear_active();
        if !self.filter_text.is_empty() {
            self.filter_text.clear();
            self.refilter();
        }
        tracing::debug!(target: targets::SELECT, ?reason, "dropdown closed");
        pass.touched(true);
    }

    fn refilter(&mut self) {
        self.view = self.engine.apply(&self.registry, &self.filter_text);
    }

    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::for_list(
            self.config.option_height,
            self.config.visible_options,
            self.view.len(),
        )
    }

    fn sync_scroll(&mut self) {
        if !self.dropdown.is_open() {
            self.scroll.reset();
            return;
        }
        let metrics = self.metrics();
        match self
            .selection
            .active()
            .and_then(|active| self.view.to_filtered(active))
        {
            Some(row) => self.scroll.reveal(row, &metrics),
            None => self.scroll.scroll_by(0.0, &metrics),
        };
    }

    /// Run the tail of the pipeline: scroll, expanded flag, change signal.
    fn finish(&mut self, pass: Pass) -> bool {
        if pass.reveal {
            self.sync_scroll();
        }

        self.expanded.set(self.dropdown.is_open());

        if pass.notify {
            let event = ChangeEvent::for_option(self.selected_option());
            tracing::debug!(
                target: targets::SELECT,
                selected_index = event.selected_index,
                value = %event.value,
                "selection committed"
            );
            self.changed.emit(event);
        }
        pass.handled
    }
}

impl Default for SingleSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SingleSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleSelect")
            .field("mode", &self.mode())
            .field("options", &self.registry.count())
            .field("selected", &self.selection.selected())
            .field("active", &self.selection.active())
            .field("dropdown", &self.dropdown.state())
            .field("filter_text", &self.filter_text)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SingleSelect: Send, Sync);
