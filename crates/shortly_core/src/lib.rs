//! Shortly core: pure form state machine, URL validation and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::{CopyOutcome, Msg, ShortenOutcome};
pub use state::{
    CopyId, FormPhase, FormState, RequestId, COPY_FEEDBACK_WINDOW, ERROR_EMPTY_INPUT,
    ERROR_INVALID_URL, ERROR_SUBMIT_FAILED,
};
pub use update::update;
pub use validate::is_valid_url;
pub use view_model::{FormViewModel, COPIED_LABEL, COPY_LABEL, SUBMIT_LABEL};
