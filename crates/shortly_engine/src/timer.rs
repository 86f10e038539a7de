use std::sync::Mutex;
use std::time::Duration;

use shortly_logging::shortly_trace;
use tokio_util::sync::CancellationToken;

use crate::CopyId;

/// One-shot copy-feedback reset that a newer copy action supersedes.
///
/// At most one reset is pending at a time: scheduling cancels the previous
/// one before arming the new one. Must be used from within a tokio runtime.
#[derive(Default)]
pub struct CopyResetTimer {
    pending: Mutex<Option<(CopyId, CancellationToken)>>,
}

impl CopyResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, copy_id: CopyId, after: Duration, on_elapsed: F)
    where
        F: FnOnce(CopyId) + Send + 'static,
    {
        let token = CancellationToken::new();
        let previous = self
            .lock_pending()
            .replace((copy_id, token.clone()));
        if let Some((previous_id, previous_token)) = previous {
            shortly_trace!("copy reset {} superseded by {}", previous_id, copy_id);
            previous_token.cancel();
        }

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(after) => on_elapsed(copy_id),
            }
        });
    }

    /// Cancels the pending reset, if any.
    pub fn cancel(&self) {
        if let Some((_, token)) = self.lock_pending().take() {
            token.cancel();
        }
    }

    /// Copy id of the most recently scheduled reset, unless it was cancelled.
    pub fn pending_copy(&self) -> Option<CopyId> {
        self.lock_pending()
            .as_ref()
            .filter(|(_, token)| !token.is_cancelled())
            .map(|(copy_id, _)| *copy_id)
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<(CopyId, CancellationToken)>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
