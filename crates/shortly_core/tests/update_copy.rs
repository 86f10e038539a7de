use std::sync::Once;

use pretty_assertions::assert_eq;
use shortly_core::{
    update, CopyOutcome, Effect, FormState, Msg, ShortenOutcome, COPIED_LABEL,
    COPY_FEEDBACK_WINDOW, COPY_LABEL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(shortly_logging::initialize_for_tests);
}

fn with_short_url(short_url: &str) -> FormState {
    let (state, _) = update(
        FormState::new(),
        Msg::InputChanged("https://example.com/very/long/path".to_string()),
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::ShortenCompleted {
            request_id: 1,
            outcome: ShortenOutcome::Shortened {
                short_url: short_url.to_string(),
            },
        },
    );
    state
}

fn copied(copy_id: u64) -> Msg {
    Msg::CopyCompleted {
        copy_id,
        outcome: CopyOutcome::Copied,
    }
}

#[test]
fn copy_without_short_url_does_nothing() {
    init_logging();
    let (mut state, effects) = update(FormState::new(), Msg::CopyClicked);

    assert!(effects.is_empty());
    assert!(!state.is_copied());
    assert!(!state.consume_dirty());
}

#[test]
fn copy_requests_clipboard_write() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, effects) = update(state, Msg::CopyClicked);

    assert_eq!(
        effects,
        vec![Effect::WriteClipboard {
            copy_id: 1,
            text: "https://sho.rt/abc123".to_string(),
        }]
    );
    // Feedback only appears once the write has completed.
    assert!(!state.is_copied());
}

#[test]
fn completed_copy_shows_feedback_and_schedules_reset() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, effects) = update(state, copied(1));

    assert!(state.is_copied());
    assert_eq!(state.view().copy_label, COPIED_LABEL);
    assert_eq!(
        effects,
        vec![Effect::ScheduleCopyReset {
            copy_id: 1,
            after: COPY_FEEDBACK_WINDOW,
        }]
    );

    let (state, effects) = update(state, Msg::CopyResetElapsed { copy_id: 1 });
    assert!(effects.is_empty());
    assert!(!state.is_copied());
    assert_eq!(state.view().copy_label, COPY_LABEL);
}

#[test]
fn reset_from_superseded_copy_is_ignored() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, _) = update(state, copied(1));
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, effects) = update(state, copied(2));
    assert_eq!(
        effects,
        vec![Effect::ScheduleCopyReset {
            copy_id: 2,
            after: COPY_FEEDBACK_WINDOW,
        }]
    );

    // The first timer fires after the second copy completed.
    let (state, _) = update(state, Msg::CopyResetElapsed { copy_id: 1 });
    assert!(state.is_copied());

    let (state, _) = update(state, Msg::CopyResetElapsed { copy_id: 2 });
    assert!(!state.is_copied());
}

#[test]
fn completion_of_superseded_copy_is_ignored() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, effects) = update(state, copied(1));

    assert!(effects.is_empty());
    assert!(!state.is_copied());
}

#[test]
fn failed_copy_stays_silent() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, effects) = update(
        state,
        Msg::CopyCompleted {
            copy_id: 1,
            outcome: CopyOutcome::Failed {
                reason: "clipboard unavailable".to_string(),
            },
        },
    );

    assert!(effects.is_empty());
    assert!(!state.is_copied());
    assert_eq!(state.error_message(), None);
}

#[test]
fn new_submission_clears_copy_feedback() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, _) = update(state, copied(1));
    assert!(state.is_copied());

    let (state, _) = update(state, Msg::SubmitClicked);
    assert!(state.is_loading());
    assert!(!state.is_copied());

    // A late reset for the old copy must not matter, and neither may a late completion.
    let (state, _) = update(state, Msg::CopyResetElapsed { copy_id: 1 });
    let (state, effects) = update(state, copied(1));
    assert!(effects.is_empty());
    assert!(!state.is_copied());
}

#[test]
fn copy_feedback_never_returns_on_its_own() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, _) = update(state, copied(1));
    let (mut state, _) = update(state, Msg::CopyResetElapsed { copy_id: 1 });

    for _ in 0..10 {
        let (next, effects) = update(state, Msg::Tick);
        assert!(effects.is_empty());
        assert!(!next.is_copied());
        state = next;
    }
}

#[test]
fn failed_copy_after_earlier_reset_leaves_no_feedback() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, _) = update(state, copied(1));
    let (state, _) = update(state, Msg::CopyClicked);

    // The first copy's window ends while the second write is still pending.
    let (state, _) = update(state, Msg::CopyResetElapsed { copy_id: 1 });
    assert!(!state.is_copied());

    let (mut state, effects) = update(
        state,
        Msg::CopyCompleted {
            copy_id: 2,
            outcome: CopyOutcome::Failed {
                reason: "clipboard unavailable".to_string(),
            },
        },
    );
    assert!(effects.is_empty());

    for _ in 0..100 {
        let (next, _) = update(state, Msg::Tick);
        state = next;
    }
    assert!(!state.is_copied());
    assert_eq!(state.view().copy_label, COPY_LABEL);
}

#[test]
fn failed_copy_hides_feedback_from_earlier_copy() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, _) = update(state, copied(1));
    let (state, _) = update(state, Msg::CopyClicked);
    assert!(state.is_copied());

    let (state, _) = update(
        state,
        Msg::CopyCompleted {
            copy_id: 2,
            outcome: CopyOutcome::Failed {
                reason: "write failed".to_string(),
            },
        },
    );
    assert!(!state.is_copied());
    assert_eq!(state.error_message(), None);
}

#[test]
fn feedback_expires_while_newer_copy_is_slow() {
    init_logging();
    let state = with_short_url("https://sho.rt/abc123");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, _) = update(state, copied(1));
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, _) = update(state, Msg::CopyResetElapsed { copy_id: 1 });
    assert!(!state.is_copied());

    // The slow write lands later and gets its own window.
    let (state, effects) = update(state, copied(2));
    assert!(state.is_copied());
    assert_eq!(
        effects,
        vec![Effect::ScheduleCopyReset {
            copy_id: 2,
            after: COPY_FEEDBACK_WINDOW,
        }]
    );
    let (state, _) = update(state, Msg::CopyResetElapsed { copy_id: 2 });
    assert!(!state.is_copied());
}
