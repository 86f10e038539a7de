use std::time::Duration;

use crate::{CopyId, RequestId};

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the already-validated URL to the shortening service.
    SubmitUrl { request_id: RequestId, url: String },
    /// Write the short URL to the system clipboard.
    WriteClipboard { copy_id: CopyId, text: String },
    /// Report [`crate::Msg::CopyResetElapsed`] after `after`, replacing any
    /// pending reset.
    ScheduleCopyReset { copy_id: CopyId, after: Duration },
}
