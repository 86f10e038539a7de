use std::time::Duration;

use crate::view_model::FormViewModel;

pub type RequestId = u64;
pub type CopyId = u64;

/// How long "Copied!" stays visible after a successful clipboard write.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

pub const ERROR_EMPTY_INPUT: &str = "Please enter a valid URL";
pub const ERROR_INVALID_URL: &str = "Please enter a valid URL starting with http:// or https://";
pub const ERROR_SUBMIT_FAILED: &str = "Failed to shorten the URL. Please try again.";

/// Observable phase of the form, derived from the individual fields.
///
/// `Validating` is never returned by [`FormState::phase`]: validation runs to
/// completion inside the `update` call that handles `SubmitClicked`, so no
/// state between two messages can be in it. The variant names that step for
/// logs and exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    input_url: String,
    short_url: Option<String>,
    is_loading: bool,
    error_message: Option<String>,
    is_copied: bool,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    latest_copy: Option<CopyId>,
    copied_by: Option<CopyId>,
    next_copy_id: CopyId,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_url(&self) -> &str {
        &self.input_url
    }

    pub fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn phase(&self) -> FormPhase {
        if self.is_loading {
            FormPhase::Submitting
        } else if self.error_message.is_some() {
            FormPhase::Failed
        } else if self.short_url.is_some() {
            FormPhase::Success
        } else {
            FormPhase::Idle
        }
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel::from_state(self)
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input_url != text {
            self.input_url = text;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    pub(crate) fn set_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
        self.dirty = true;
    }

    pub(crate) fn dismiss_error(&mut self) {
        if self.error_message.take().is_some() {
            self.dirty = true;
        }
    }

    /// Enters `Submitting`: clears error and copy feedback, supersedes any
    /// pending copy action and allocates the next request id.
    pub(crate) fn begin_submission(&mut self) -> RequestId {
        self.error_message = None;
        self.is_copied = false;
        self.copied_by = None;
        self.latest_copy = None;
        self.is_loading = true;
        self.next_request_id += 1;
        self.in_flight = Some(self.next_request_id);
        self.dirty = true;
        self.next_request_id
    }

    /// Returns false (and changes nothing) when `request_id` is not the
    /// submission currently awaited.
    pub(crate) fn finish_submission(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.is_loading = false;
        self.dirty = true;
        true
    }

    pub(crate) fn set_short_url(&mut self, short_url: String) {
        self.short_url = Some(short_url);
        self.dirty = true;
    }

    pub(crate) fn begin_copy(&mut self) -> CopyId {
        self.next_copy_id += 1;
        self.latest_copy = Some(self.next_copy_id);
        self.next_copy_id
    }

    pub(crate) fn is_latest_copy(&self, copy_id: CopyId) -> bool {
        self.latest_copy == Some(copy_id)
    }

    /// Shows "Copied!" on behalf of `copy_id`; only that copy's reset hides it.
    pub(crate) fn mark_copied(&mut self, copy_id: CopyId) {
        self.copied_by = Some(copy_id);
        if !self.is_copied {
            self.is_copied = true;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_copied(&mut self) {
        self.copied_by = None;
        if self.is_copied {
            self.is_copied = false;
            self.dirty = true;
        }
    }

    pub(crate) fn is_copied_by(&self, copy_id: CopyId) -> bool {
        self.copied_by == Some(copy_id)
    }
}
