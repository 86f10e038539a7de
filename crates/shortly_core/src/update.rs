use crate::{
    is_valid_url, CopyOutcome, Effect, FormState, Msg, ShortenOutcome, COPY_FEEDBACK_WINDOW,
    ERROR_EMPTY_INPUT, ERROR_INVALID_URL, ERROR_SUBMIT_FAILED,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // The input control is disabled while a submission is in flight.
            if !state.is_loading() {
                state.set_input(text);
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::ShortenCompleted {
            request_id,
            outcome,
        } => {
            if state.finish_submission(request_id) {
                match outcome {
                    ShortenOutcome::Shortened { short_url } => state.set_short_url(short_url),
                    // Any earlier short URL stays on display next to the error.
                    ShortenOutcome::Failed { .. } => state.set_error(ERROR_SUBMIT_FAILED),
                }
            }
            Vec::new()
        }
        Msg::DismissErrorClicked => {
            state.dismiss_error();
            Vec::new()
        }
        Msg::CopyClicked => match state.short_url() {
            Some(short_url) => {
                let text = short_url.to_string();
                let copy_id = state.begin_copy();
                vec![Effect::WriteClipboard { copy_id, text }]
            }
            None => Vec::new(),
        },
        Msg::CopyCompleted { copy_id, outcome } => {
            if !state.is_latest_copy(copy_id) {
                return (state, Vec::new());
            }
            match outcome {
                CopyOutcome::Copied => {
                    state.mark_copied(copy_id);
                    vec![Effect::ScheduleCopyReset {
                        copy_id,
                        after: COPY_FEEDBACK_WINDOW,
                    }]
                }
                // Older feedback must not outlive a write that did not happen.
                CopyOutcome::Failed { .. } => {
                    state.clear_copied();
                    Vec::new()
                }
            }
        }
        Msg::CopyResetElapsed { copy_id } => {
            if state.is_copied_by(copy_id) {
                state.clear_copied();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut FormState) -> Vec<Effect> {
    // Admission guard: one submission at a time.
    if state.is_loading() {
        return Vec::new();
    }

    if state.input_url().is_empty() {
        state.set_error(ERROR_EMPTY_INPUT);
        return Vec::new();
    }

    if !is_valid_url(state.input_url()) {
        state.set_error(ERROR_INVALID_URL);
        state.clear_input();
        return Vec::new();
    }

    let url = state.input_url().to_string();
    let request_id = state.begin_submission();
    vec![Effect::SubmitUrl { request_id, url }]
}
