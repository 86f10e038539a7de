//! Shortly engine: shortening-service client, clipboard and copy-reset timer.
mod client;
mod clipboard;
mod engine;
mod timer;
mod types;

pub use client::{ClientSettings, ReqwestShorteningClient, ShorteningClient, DEFAULT_API_URL};
pub use clipboard::{ArboardClipboard, ClipboardAdapter};
pub use engine::EngineHandle;
pub use timer::CopyResetTimer;
pub use types::{
    ClipboardError, CopyId, EngineEvent, FailureKind, RequestId, ShortenError, ShortenRequest,
    ShortenResponse,
};
