//! System clipboard access for copying the short URL.

use std::sync::{Arc, Mutex};

use arboard::Clipboard;

use crate::ClipboardError;

#[async_trait::async_trait]
pub trait ClipboardAdapter: Send + Sync {
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by `arboard`.
///
/// The handle is opened on first use and kept alive afterwards; on X11 the
/// copied text is only served while a handle exists.
#[derive(Default)]
pub struct ArboardClipboard {
    handle: Arc<Mutex<Option<Clipboard>>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ClipboardAdapter for ArboardClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let handle = Arc::clone(&self.handle);
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut slot = handle
                .lock()
                .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;
            if slot.is_none() {
                let clipboard =
                    Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
                *slot = Some(clipboard);
            }
            match slot.as_mut() {
                Some(clipboard) => clipboard
                    .set_text(text)
                    .map_err(|err| ClipboardError::WriteFailed(err.to_string())),
                None => Err(ClipboardError::Unavailable("no clipboard handle".to_string())),
            }
        })
        .await
        .map_err(|err| ClipboardError::WriteFailed(err.to_string()))?
    }
}
