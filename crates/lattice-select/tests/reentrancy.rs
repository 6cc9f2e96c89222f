//! Observers that drive the widget from inside a notification.

use std::sync::Arc;

use lattice_select::{ChangeEvent, Emission, Key, OptionDecl, SelectInput, SingleSelect};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Changed(i32),
    Expanded(bool),
}

#[test]
fn posted_commit_runs_after_current_pipeline() {
    let mut select = SingleSelect::with_options(["Lorem", "Ipsum", "Dolor"]);
    let log = Arc::new(Mutex::new(Vec::new()));

    // Redirect any commit of "Lorem" to "Dolor".
    let poster = select.poster();
    let sink = log.clone();
    select.changed.connect(move |event: &ChangeEvent| {
        sink.lock().push(Seen::Changed(event.selected_index));
        if event.selected_index == 0 {
            poster.post(SelectInput::Select(2));
        }
    });

    select.dispatch(SelectInput::key(Key::ArrowDown));

    assert_eq!(select.selected_index(), 2);
    assert_eq!(*log.lock(), vec![Seen::Changed(0), Seen::Changed(2)]);
}

#[test]
fn observers_see_final_state_of_each_input() {
    let mut select = SingleSelect::with_options(["Lorem", "Ipsum", "Dolor"]);
    let log = Arc::new(Mutex::new(Vec::new()));

    let sink = log.clone();
    select
        .expanded_changed()
        .connect(move |open| sink.lock().push(Seen::Expanded(*open)));
    let sink = log.clone();
    select
        .changed
        .connect(move |event| sink.lock().push(Seen::Changed(event.selected_index)));

    select.dispatch(SelectInput::key(Key::Enter));
    select.dispatch(SelectInput::key(Key::ArrowDown));
    select.dispatch(SelectInput::key(Key::Enter));

    // The flag flips before the change is announced.
    assert_eq!(
        *log.lock(),
        vec![Seen::Expanded(true), Seen::Expanded(false), Seen::Changed(1)]
    );
}

#[test]
fn posted_inputs_drain_in_order() {
    let mut select = SingleSelect::with_options(vec![
        OptionDecl::new("Lorem"),
        OptionDecl::new("Ipsum"),
        OptionDecl::new("Dolor"),
    ]);
    let poster = select.poster();

    poster.post(SelectInput::key(Key::Enter));
    poster.post(SelectInput::key(Key::End));
    poster.post(SelectInput::key(Key::Enter));

    // Posted inputs run right after the next dispatched one.
    select.dispatch(SelectInput::FocusOut);

    assert_eq!(select.selected_index(), 2);
    assert!(!select.is_expanded());
}

#[test]
fn suppressed_commit_does_not_notify() {
    let mut select = SingleSelect::with_options(["Lorem", "Ipsum"]);
    let count = Arc::new(Mutex::new(0usize));
    let sink = count.clone();
    select.changed.connect(move |_| *sink.lock() += 1);

    assert!(select.commit_with(Some(1), Emission::Suppressed));
    assert_eq!(select.value(), "Ipsum");
    assert_eq!(*count.lock(), 0);

    assert!(select.commit_with(Some(0), Emission::Notify));
    assert_eq!(*count.lock(), 1);
}

#[test]
fn blocked_signal_drops_notifications() {
    let mut select = SingleSelect::with_options(["Lorem", "Ipsum"]);
    let count = Arc::new(Mutex::new(0usize));
    let sink = count.clone();
    select.changed.connect(move |_| *sink.lock() += 1);

    select.changed.set_blocked(true);
    select.dispatch(SelectInput::key(Key::ArrowDown));
    select.changed.set_blocked(false);
    select.dispatch(SelectInput::key(Key::ArrowDown));

    assert_eq!(select.selected_index(), 1);
    assert_eq!(*count.lock(), 1);
}
