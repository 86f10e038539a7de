use shortly_core::{CopyOutcome, Effect, Msg, ShortenOutcome};
use shortly_engine::{EngineEvent, EngineHandle};
use shortly_logging::{shortly_info, shortly_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn check_health(&self) {
        self.engine.check_health();
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitUrl { request_id, url } => {
                    shortly_info!(
                        "SubmitUrl request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    self.engine.shorten(request_id, url);
                }
                Effect::WriteClipboard { copy_id, text } => {
                    self.engine.copy(copy_id, text);
                }
                Effect::ScheduleCopyReset { copy_id, after } => {
                    self.engine.schedule_copy_reset(copy_id, after);
                }
            }
        }
    }

    /// Drains every engine event that has arrived so far.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            if let Some(msg) = map_event(event) {
                inbox.push(msg);
            }
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::ShortenCompleted { request_id, result } => Some(Msg::ShortenCompleted {
            request_id,
            outcome: match result {
                Ok(response) => ShortenOutcome::Shortened {
                    short_url: response.short_url,
                },
                Err(err) => ShortenOutcome::Failed {
                    reason: err.to_string(),
                },
            },
        }),
        EngineEvent::CopyCompleted { copy_id, result } => Some(Msg::CopyCompleted {
            copy_id,
            outcome: match result {
                Ok(()) => CopyOutcome::Copied,
                Err(err) => CopyOutcome::Failed {
                    reason: err.to_string(),
                },
            },
        }),
        EngineEvent::CopyResetElapsed { copy_id } => Some(Msg::CopyResetElapsed { copy_id }),
        EngineEvent::HealthChecked { result } => {
            match result {
                Ok(true) => shortly_info!("shortening service is healthy"),
                Ok(false) => shortly_warn!("shortening service reports unhealthy"),
                Err(err) => shortly_warn!("shortening service unreachable: {}", err),
            }
            None
        }
    }
}
