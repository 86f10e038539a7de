use crate::{FormPhase, FormState};

pub const SUBMIT_LABEL: &str = "Shortly!";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// Everything the view needs to draw the form, detached from [`FormState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub phase: FormPhase,
    pub input_text: String,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    /// True while the submit control should show a spinner instead of its label.
    pub show_spinner: bool,
    pub alert: Option<String>,
    pub short_url: Option<String>,
    pub copy_enabled: bool,
    pub copy_label: &'static str,
}

impl FormViewModel {
    pub(crate) fn from_state(state: &FormState) -> Self {
        let loading = state.is_loading();
        Self {
            phase: state.phase(),
            input_text: state.input_url().to_string(),
            input_enabled: !loading,
            submit_enabled: !loading,
            show_spinner: loading,
            alert: state.error_message().map(ToOwned::to_owned),
            short_url: state.short_url().map(ToOwned::to_owned),
            copy_enabled: state.short_url().is_some(),
            copy_label: if state.is_copied() {
                COPIED_LABEL
            } else {
                COPY_LABEL
            },
        }
    }
}
