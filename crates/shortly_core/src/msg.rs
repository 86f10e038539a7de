use crate::{CopyId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User pressed the submit control.
    SubmitClicked,
    /// Shortening service answered (or failed) for a submission.
    ShortenCompleted {
        request_id: RequestId,
        outcome: ShortenOutcome,
    },
    /// User closed the error alert.
    DismissErrorClicked,
    /// User asked to copy the short URL.
    CopyClicked,
    /// Clipboard write finished for a copy action.
    CopyCompleted {
        copy_id: CopyId,
        outcome: CopyOutcome,
    },
    /// Copy feedback window ran out for a copy action.
    CopyResetElapsed { copy_id: CopyId },
    /// UI/render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    Shortened { short_url: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed { reason: String },
}
