use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use shortly_logging::{shortly_debug, shortly_info, shortly_warn};

use crate::clipboard::ClipboardAdapter;
use crate::client::ShorteningClient;
use crate::timer::CopyResetTimer;
use crate::{CopyId, EngineEvent, RequestId};

enum EngineCommand {
    Shorten { request_id: RequestId, url: String },
    Copy { copy_id: CopyId, text: String },
    ScheduleCopyReset { copy_id: CopyId, after: Duration },
    CheckHealth,
}

/// Runs submissions, clipboard writes and copy-reset timers on a background
/// tokio runtime, reporting results as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(
        client: Arc<dyn ShorteningClient>,
        clipboard: Arc<dyn ClipboardAdapter>,
    ) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("shortly-engine".to_string())
            .spawn(move || {
                let _enter = runtime.enter();
                let timer = CopyResetTimer::new();
                while let Ok(command) = cmd_rx.recv() {
                    dispatch(
                        &runtime,
                        &timer,
                        &client,
                        &clipboard,
                        command,
                        event_tx.clone(),
                    );
                }
                timer.cancel();
                shortly_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn shorten(&self, request_id: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::Shorten {
            request_id,
            url: url.into(),
        });
    }

    pub fn copy(&self, copy_id: CopyId, text: impl Into<String>) {
        self.send(EngineCommand::Copy {
            copy_id,
            text: text.into(),
        });
    }

    pub fn schedule_copy_reset(&self, copy_id: CopyId, after: Duration) {
        self.send(EngineCommand::ScheduleCopyReset { copy_id, after });
    }

    pub fn check_health(&self) {
        self.send(EngineCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            shortly_warn!("engine thread is gone; command dropped");
        }
    }
}

fn dispatch(
    runtime: &tokio::runtime::Runtime,
    timer: &CopyResetTimer,
    client: &Arc<dyn ShorteningClient>,
    clipboard: &Arc<dyn ClipboardAdapter>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Shorten { request_id, url } => {
            let client = Arc::clone(client);
            runtime.spawn(async move {
                let result = client.submit(&url).await;
                match &result {
                    Ok(response) => {
                        shortly_info!("request {} shortened to {}", request_id, response.short_url)
                    }
                    Err(err) => shortly_warn!("request {} failed: {}", request_id, err),
                }
                let _ = event_tx.send(EngineEvent::ShortenCompleted { request_id, result });
            });
        }
        EngineCommand::Copy { copy_id, text } => {
            let clipboard = Arc::clone(clipboard);
            runtime.spawn(async move {
                let result = clipboard.write(&text).await;
                if let Err(err) = &result {
                    shortly_warn!("copy {} failed: {}", copy_id, err);
                }
                let _ = event_tx.send(EngineEvent::CopyCompleted { copy_id, result });
            });
        }
        EngineCommand::CheckHealth => {
            let client = Arc::clone(client);
            runtime.spawn(async move {
                let result = client.check_health().await;
                let _ = event_tx.send(EngineEvent::HealthChecked { result });
            });
        }
        // Handled inline so consecutive resets supersede each other in command order.
        EngineCommand::ScheduleCopyReset { copy_id, after } => {
            timer.schedule(copy_id, after, move |copy_id| {
                let _ = event_tx.send(EngineEvent::CopyResetElapsed { copy_id });
            });
        }
    }
}
